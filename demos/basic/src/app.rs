use log::{info, warn};

use framesync_embedded::{Embedded, EmbeddedConfig};
use framesync_host::{
    FilterChangedEvent, Host, HostConfig, LinkStateEvent, RejectedEvent, RemoteTextEvent,
    SyncEvents,
};
use framesync_shared::{backends::loopback::LocalWindowPair, Filter, Role};

const HOST_ORIGIN: &str = "http://localhost:5173";
const CHILD_ORIGIN: &str = "http://localhost:3000";

pub struct App {
    windows: LocalWindowPair,
    host: Host,
    embedded: Option<Embedded>,
}

impl App {
    pub fn default() -> Self {
        info!("Basic Framesync Demo started");

        let windows = LocalWindowPair::new(HOST_ORIGIN, CHILD_ORIGIN);
        let mut host = Host::new(HostConfig::default());
        host.listen(Box::new(windows.host.listen()));

        App {
            windows,
            host,
            embedded: None,
        }
    }

    pub fn run(&mut self) {
        // pick a filter before the frame exists; the handshake carries it over
        self.host.select_filter(Filter::Only(Role::Manager));
        self.toggle_frame();
        self.update();
        self.print_users();

        self.host.set_text("hello");
        self.update();

        if let Some(embedded) = self.embedded.as_mut() {
            embedded.set_text("hi back");
            embedded.select_filter(Filter::Only(Role::Designer));
        }
        self.update();
        self.print_users();
        info!("Host shows: {}", self.host.remote_text_display());

        self.toggle_frame();
        self.host.select_filter(Filter::All);
        self.update();
        self.print_users();
    }

    fn toggle_frame(&mut self) {
        let frame = self.windows.frame_handle();
        let mounted = self.host.toggle_frame(|| frame);
        if !mounted {
            self.embedded = None;
            self.windows.embedded.unload();
            return;
        }

        // the iframe document boots, then the host sees `load`
        self.windows.embedded.load();
        let config = match EmbeddedConfig::new(HOST_ORIGIN) {
            Ok(config) => config,
            Err(error) => {
                warn!("Embedded config error: {}", error);
                return;
            }
        };
        let mut embedded = Embedded::new(config);
        embedded.listen(Box::new(self.windows.embedded.listen()));
        embedded.attach(self.windows.parent_handle());
        self.embedded = Some(embedded);

        self.host.frame_loaded();
    }

    fn update(&mut self) {
        let events = self.host.receive();
        Self::log_events("Host", events);

        if let Some(embedded) = self.embedded.as_mut() {
            let events = embedded.receive();
            Self::log_events("Embedded", events);
        }
    }

    fn log_events(party: &str, mut events: SyncEvents) {
        for state in events.read::<LinkStateEvent>() {
            info!("{} link -> {:?}", party, state);
        }
        for filter in events.read::<FilterChangedEvent>() {
            info!("{} recv <- filter {}", party, filter);
        }
        for text in events.read::<RemoteTextEvent>() {
            info!("{} recv <- text {:?}", party, text);
        }
        for error in events.read::<RejectedEvent>() {
            info!("{} dropped: {}", party, error);
        }
    }

    fn print_users(&self) {
        info!("Users ({}):", self.host.filter());
        for user in self.host.filtered_users() {
            info!("  {} <{}> {}", user.name, user.email, user.role);
        }
    }
}
