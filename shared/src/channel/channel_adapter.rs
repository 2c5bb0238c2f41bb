use log::trace;

use super::error::{ChannelError, InboundError};
use crate::{
    envelope::{
        codec::{decode, encode},
        envelope::Envelope,
    },
    origin::{origin::Origin, origin_gate::OriginGate},
    transport::{error::TransportError, MessageData, PeerHandle, RawMessage},
};

/// Stateless conduit between the reconciler and the transport.
///
/// Outbound, it encodes envelopes and posts them scoped to the trusted
/// origin. Inbound, it runs the origin gate and then the codec. The same
/// origin string is used both ways, so the transport itself also refuses to
/// deliver our messages to an unexpected document.
#[derive(Clone, Debug, Default)]
pub struct ChannelAdapter {
    gate: OriginGate,
}

impl ChannelAdapter {
    pub fn new(trusted_origin: Origin) -> Self {
        Self {
            gate: OriginGate::new(trusted_origin),
        }
    }

    pub fn trusted_origin(&self) -> &Origin {
        self.gate.trusted()
    }

    pub fn gate(&self) -> &OriginGate {
        &self.gate
    }

    /// Encodes `envelope` and posts it to the peer window.
    ///
    /// Returns [`ChannelError::Unavailable`] without touching the transport
    /// when `handle` is absent or its window is not loaded.
    pub fn send(
        &self,
        handle: Option<&dyn PeerHandle>,
        envelope: &Envelope,
    ) -> Result<(), ChannelError> {
        let Some(handle) = handle else {
            return Err(ChannelError::Unavailable);
        };
        if !handle.is_available() {
            return Err(ChannelError::Unavailable);
        }

        let data = encode(envelope);
        trace!("posting {} to {}", data, self.trusted_origin());

        match handle.post_message(&data, self.trusted_origin().as_str()) {
            Ok(()) => Ok(()),
            // window went away between the availability check and the post
            Err(TransportError::WindowUnavailable) => Err(ChannelError::Unavailable),
            Err(error) => Err(error.into()),
        }
    }

    /// Validates an inbound message: origin first, then payload shape
    pub fn accept(&self, raw: RawMessage) -> Result<Envelope, InboundError> {
        if !self.gate.is_trusted(&raw.origin) {
            return Err(InboundError::UntrustedOrigin { origin: raw.origin });
        }

        let text = match raw.data {
            MessageData::Text(text) => text,
            MessageData::NonText { kind } => return Err(InboundError::NonTextPayload { kind }),
        };

        Ok(decode(&text)?)
    }
}
