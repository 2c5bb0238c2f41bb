use log::debug;

use framesync_embedded::{Embedded, EmbeddedConfig, EmbeddedVariant};
use framesync_host::{Host, HostConfig};
use framesync_shared::backends::loopback::LocalWindowPair;

pub const HOST_ORIGIN: &str = "http://localhost:5173";
pub const CHILD_ORIGIN: &str = "http://localhost:3000";

/// A host page plus the document inside its iframe, wired over loopback
/// windows.
///
/// The embedded party only exists while the frame is mounted and loaded,
/// just as a real iframe document is created and destroyed with its element.
pub struct TestPair {
    pub windows: LocalWindowPair,
    pub host: Host,
    pub embedded: Option<Embedded>,
    variant: EmbeddedVariant,
}

impl TestPair {
    pub fn new() -> Self {
        Self::with_variant(EmbeddedVariant::Full)
    }

    pub fn with_variant(variant: EmbeddedVariant) -> Self {
        let windows = LocalWindowPair::new(HOST_ORIGIN, CHILD_ORIGIN);
        let config = HostConfig::new(CHILD_ORIGIN).expect("valid child origin");
        let mut host = Host::new(config);
        host.listen(Box::new(windows.host.listen()));

        Self {
            windows,
            host,
            embedded: None,
            variant,
        }
    }

    /// Inserts the iframe element; its document has not loaded yet
    pub fn mount(&mut self) {
        let frame = self.windows.frame_handle();
        self.host.mount_frame(frame);
    }

    /// Boots the embedded document and fires the iframe `load` event.
    ///
    /// The document registers its listener while its scripts run, which
    /// happens before the host observes `load`.
    pub fn load(&mut self) {
        debug!("loading embedded document");
        self.windows.embedded.load();

        let config = EmbeddedConfig::new(HOST_ORIGIN)
            .expect("valid host origin")
            .with_variant(self.variant);
        let mut embedded = Embedded::new(config);
        embedded.listen(Box::new(self.windows.embedded.listen()));
        embedded.attach(self.windows.parent_handle());
        self.embedded = Some(embedded);

        self.host.frame_loaded();
    }

    pub fn mount_and_load(&mut self) {
        self.mount();
        self.load();
    }

    /// Reloads the document inside a frame that stays mounted. The old
    /// document and its listener go away before the new one boots.
    pub fn reload(&mut self) {
        debug!("reloading embedded document");
        self.embedded = None;
        self.windows.embedded.unload();
        self.load();
    }

    /// Removes the iframe element, destroying its document
    pub fn unmount(&mut self) {
        self.host.unmount_frame();
        self.embedded = None;
        self.windows.embedded.unload();
    }

    pub fn embedded(&self) -> &Embedded {
        self.embedded.as_ref().expect("embedded document is loaded")
    }

    pub fn embedded_mut(&mut self) -> &mut Embedded {
        self.embedded.as_mut().expect("embedded document is loaded")
    }
}

impl Default for TestPair {
    fn default() -> Self {
        Self::new()
    }
}
