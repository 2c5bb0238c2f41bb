use thiserror::Error;

use crate::{envelope::error::DecodeError, transport::error::TransportError};

/// Errors that can occur when sending an envelope to the peer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// No live peer handle; expected while the embedded document is mounting
    #[error("Channel unavailable. No peer window is attached or loaded")]
    Unavailable,

    /// Transport error
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Reasons an inbound message is dropped before reaching the reconciler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InboundError {
    /// Message from a non-matching origin (SECURITY: never decoded)
    #[error("Message from untrusted origin '{origin}' dropped")]
    UntrustedOrigin { origin: String },

    /// The message payload is not text
    #[error("Non-text message payload of kind '{kind}' dropped")]
    NonTextPayload { kind: String },

    /// Decode error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}
