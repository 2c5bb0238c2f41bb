use log::info;

use framesync_shared::{
    Filter, LinkState, LocalState, MessageReceiver, PartyType, PeerHandle, Reconciler, SyncEvents,
};

use crate::{Directory, HostConfig, User};

/// Shown in place of the remote text until the embedded document has sent any
pub const NO_REMOTE_TEXT_PLACEHOLDER: &str = "No message from child yet...";

/// The host page's party.
///
/// The rendering layer calls [`Host::select_filter`] and [`Host::set_text`]
/// on user input, wires the frame toggle to [`Host::toggle_frame`] and the
/// iframe `load` event to [`Host::frame_loaded`], and calls
/// [`Host::receive`] whenever messages may have arrived.
pub struct Host {
    reconciler: Reconciler,
    directory: Directory,
}

impl Host {
    /// Create a new Host
    pub fn new(config: HostConfig) -> Self {
        let HostConfig { sync, directory } = config;
        Self {
            reconciler: Reconciler::new(PartyType::Host, sync),
            directory,
        }
    }

    /// Start receiving messages through the given listener. The listener is
    /// deregistered when the Host is dropped.
    pub fn listen(&mut self, receiver: Box<dyn MessageReceiver>) {
        self.reconciler.listen(receiver);
    }

    pub fn is_listening(&self) -> bool {
        self.reconciler.is_listening()
    }

    // Frame

    /// The iframe element was inserted. Nothing is sent until it loads.
    pub fn mount_frame(&mut self, frame: Box<dyn PeerHandle>) {
        self.reconciler.mount(frame);
    }

    /// The iframe fired `load`; pushes the current filter into it
    pub fn frame_loaded(&mut self) {
        self.reconciler.ready();
    }

    /// The iframe element was removed
    pub fn unmount_frame(&mut self) {
        self.reconciler.unmount();
    }

    pub fn is_frame_mounted(&self) -> bool {
        self.reconciler.link_state().is_mounted()
    }

    /// Flips the frame between mounted and unmounted. `make_frame` is only
    /// called when mounting. Returns whether the frame is now mounted.
    pub fn toggle_frame<F: FnOnce() -> Box<dyn PeerHandle>>(&mut self, make_frame: F) -> bool {
        if self.is_frame_mounted() {
            info!("unmounting frame");
            self.unmount_frame();
        } else {
            info!("mounting frame");
            self.mount_frame(make_frame());
        }
        self.is_frame_mounted()
    }

    // Interaction

    /// A filter button was clicked
    pub fn select_filter(&mut self, filter: Filter) {
        self.reconciler.set_filter(filter);
    }

    /// The outgoing text input changed
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.reconciler.set_text(text);
    }

    /// Must be called regularly; applies messages from the embedded
    /// document and returns what changed
    pub fn receive(&mut self) -> SyncEvents {
        self.reconciler.receive()
    }

    // Rendering

    pub fn filter(&self) -> Filter {
        self.reconciler.filter()
    }

    pub fn remote_text(&self) -> &str {
        self.reconciler.remote_text()
    }

    /// Remote text, or a placeholder while nothing has been received
    pub fn remote_text_display(&self) -> &str {
        if self.reconciler.state().has_remote_text() {
            self.reconciler.remote_text()
        } else {
            NO_REMOTE_TEXT_PLACEHOLDER
        }
    }

    pub fn local_input_text(&self) -> &str {
        self.reconciler.local_input_text()
    }

    /// Directory records passing the current filter
    pub fn filtered_users(&self) -> Vec<&User> {
        self.directory.filtered(self.filter())
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    // Introspection

    pub fn state(&self) -> &LocalState {
        self.reconciler.state()
    }

    pub fn link_state(&self) -> LinkState {
        self.reconciler.link_state()
    }

    pub fn sent_count(&self) -> usize {
        self.reconciler.sent_count()
    }
}
