use log::{debug, info, warn};

use super::{
    events::SyncEvents, link_state::LinkState, local_state::LocalState, sync_config::SyncConfig,
};
use crate::{
    channel::{
        channel_adapter::ChannelAdapter,
        error::{ChannelError, InboundError},
    },
    envelope::{envelope::Envelope, error::DecodeError},
    role::Filter,
    transport::{MessageReceiver, PeerHandle, RawMessage},
    types::PartyType,
};

/// Keeps one party's [`LocalState`] consistent with user actions and with
/// what the peer sends.
///
/// Every method runs to completion synchronously; nothing here blocks or
/// waits on the peer. Conflicting writes from both sides are resolved
/// last-write-wins per field, since the wire carries no ordering metadata.
pub struct Reconciler {
    party: PartyType,
    config: SyncConfig,
    adapter: ChannelAdapter,
    link: LinkState,
    peer: Option<Box<dyn PeerHandle>>,
    listener: Option<Box<dyn MessageReceiver>>,
    state: LocalState,
    incoming_events: SyncEvents,
    sent_count: usize,
}

impl Reconciler {
    pub fn new(party: PartyType, config: SyncConfig) -> Self {
        let adapter = ChannelAdapter::new(config.trusted_origin.clone());
        Self {
            party,
            config,
            adapter,
            link: LinkState::Unmounted,
            peer: None,
            listener: None,
            state: LocalState::default(),
            incoming_events: SyncEvents::new(),
            sent_count: 0,
        }
    }

    // Listener

    /// Takes ownership of an inbound message listener. A previously held
    /// listener is dropped, which deregisters it.
    pub fn listen(&mut self, receiver: Box<dyn MessageReceiver>) {
        if self.listener.is_some() {
            debug!("{}: replacing message listener", self.party.name());
        }
        self.listener = Some(receiver);
    }

    /// Drops the inbound listener. Messages that arrive afterwards are lost.
    pub fn stop_listening(&mut self) {
        self.listener = None;
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    // Link lifecycle

    /// The peer document was inserted (e.g. the iframe element was created).
    /// It cannot receive anything until [`Reconciler::ready`] is called.
    pub fn mount(&mut self, peer: Box<dyn PeerHandle>) {
        if self.link.is_mounted() {
            warn!(
                "{}: mount ignored, peer is already mounted ({:?})",
                self.party.name(),
                self.link
            );
            return;
        }
        self.peer = Some(peer);
        self.set_link(LinkState::MountedAwaitingReady);
    }

    /// The peer document signalled it has loaded. Performs the handshake:
    /// the peer booted without knowing our state, so the current filter is
    /// pushed to it right away.
    ///
    /// A load while already `Ready` means the peer document reloaded or
    /// navigated inside the same frame, and gets a fresh handshake.
    pub fn ready(&mut self) {
        match self.link {
            LinkState::Unmounted => {
                debug!("{}: ready signal ignored, nothing mounted", self.party.name());
                return;
            }
            LinkState::MountedAwaitingReady => self.set_link(LinkState::Ready),
            LinkState::Ready => debug!("{}: peer reloaded", self.party.name()),
        }

        if self.config.handshake_on_ready {
            self.send(Envelope::filter_update(self.state.filter));
        }
    }

    /// The peer document was torn down. Later sends are no-ops until the
    /// next mount. Messages already posted are not retracted.
    pub fn unmount(&mut self) {
        if !self.link.is_mounted() {
            return;
        }
        self.peer = None;
        self.set_link(LinkState::Unmounted);
    }

    // Local interaction

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
        if self.link.is_ready() {
            self.send(Envelope::filter_update(filter));
        }
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        let text = text.into();
        self.state.local_input_text = text.clone();
        if self.config.sync_text && self.link.is_ready() {
            self.send(Envelope::TextUpdate { text });
        }
    }

    // Inbound

    /// Drains the listener, applies every message, and returns everything
    /// that happened since the previous call
    pub fn receive(&mut self) -> SyncEvents {
        while let Some(raw) = self.listener.as_mut().and_then(|listener| listener.receive()) {
            self.handle_message(raw);
        }
        self.incoming_events.take()
    }

    /// Applies one inbound message, for transports that push instead of
    /// queueing. Invalid messages are dropped and logged, never surfaced.
    pub fn handle_message(&mut self, raw: RawMessage) {
        match self.adapter.accept(raw) {
            Ok(envelope) => self.apply(envelope),
            Err(error) => {
                match &error {
                    InboundError::Decode(DecodeError::UnknownVariant { .. }) => {
                        debug!("{}: {}", self.party.name(), error)
                    }
                    _ => warn!("{}: {}", self.party.name(), error),
                }
                self.incoming_events.push_rejection(error);
            }
        }
    }

    // Getters

    pub fn party(&self) -> PartyType {
        self.party
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn link_state(&self) -> LinkState {
        self.link
    }

    pub fn state(&self) -> &LocalState {
        &self.state
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn remote_text(&self) -> &str {
        &self.state.remote_text
    }

    pub fn local_input_text(&self) -> &str {
        &self.state.local_input_text
    }

    /// Number of envelopes handed to a live peer window
    pub fn sent_count(&self) -> usize {
        self.sent_count
    }

    // Private

    fn apply(&mut self, envelope: Envelope) {
        match envelope {
            Envelope::FilterUpdate { filter } => {
                debug!("{}: filter <- {}", self.party.name(), filter);
                self.state.filter = filter;
                self.incoming_events.push_filter_change(filter);
            }
            Envelope::TextUpdate { text } => {
                if !self.config.sync_text {
                    debug!("{}: text sync disabled, ignoring text update", self.party.name());
                    return;
                }
                debug!("{}: remote text <- {:?}", self.party.name(), text);
                self.state.remote_text = text.clone();
                self.incoming_events.push_remote_text(text);
            }
        }
    }

    fn send(&mut self, envelope: Envelope) {
        match self.adapter.send(self.peer.as_deref(), &envelope) {
            Ok(()) => self.sent_count += 1,
            Err(ChannelError::Unavailable) => {
                debug!(
                    "{}: {:?} not sent, peer window unavailable",
                    self.party.name(),
                    envelope.kind()
                );
            }
            Err(error) => warn!("{}: {}", self.party.name(), error),
        }
    }

    fn set_link(&mut self, next: LinkState) {
        info!("{}: link {:?} -> {:?}", self.party.name(), self.link, next);
        self.link = next;
        self.incoming_events.push_link_change(next);
    }
}
