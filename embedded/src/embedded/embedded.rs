use log::debug;

use framesync_shared::{
    Filter, LinkState, LocalState, MessageReceiver, PartyType, PeerHandle, Reconciler, SyncEvents,
};

use super::embedded_config::{EmbeddedConfig, EmbeddedVariant};

/// The embedded document's party.
///
/// Unlike the host, the embedded document is already running by the time
/// it can talk to its parent, so attaching to the parent makes the link
/// ready immediately. It waits for the host's handshake instead of sending
/// one of its own.
pub struct Embedded {
    reconciler: Reconciler,
    variant: EmbeddedVariant,
}

impl Embedded {
    /// Create a new Embedded party
    pub fn new(config: EmbeddedConfig) -> Self {
        Self {
            reconciler: Reconciler::new(PartyType::Embedded, config.sync_config()),
            variant: config.variant,
        }
    }

    /// Start receiving messages from the parent. Register this before the
    /// document finishes loading, or the host's handshake is lost.
    pub fn listen(&mut self, receiver: Box<dyn MessageReceiver>) {
        self.reconciler.listen(receiver);
    }

    pub fn is_listening(&self) -> bool {
        self.reconciler.is_listening()
    }

    /// Connect to the parent window
    pub fn attach(&mut self, parent: Box<dyn PeerHandle>) {
        self.reconciler.mount(parent);
        self.reconciler.ready();
    }

    /// Page teardown: stop sending to the parent and deregister the
    /// message listener
    pub fn detach(&mut self) {
        self.reconciler.unmount();
        self.reconciler.stop_listening();
    }

    // Interaction

    pub fn select_filter(&mut self, filter: Filter) {
        self.reconciler.set_filter(filter);
    }

    /// The outgoing text input changed. In the minimal variant the text is
    /// kept locally and never sent.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        if self.variant == EmbeddedVariant::Minimal {
            debug!("minimal variant, text stays local");
        }
        self.reconciler.set_text(text);
    }

    /// Must be called regularly; applies messages from the host and returns
    /// what changed
    pub fn receive(&mut self) -> SyncEvents {
        self.reconciler.receive()
    }

    // Getters

    pub fn filter(&self) -> Filter {
        self.reconciler.filter()
    }

    pub fn remote_text(&self) -> &str {
        self.reconciler.remote_text()
    }

    pub fn local_input_text(&self) -> &str {
        self.reconciler.local_input_text()
    }

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
