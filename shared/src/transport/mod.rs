//! The seam between the protocol and whatever actually moves messages
//! between windows: the browser in production, an in-memory loopback in
//! tests and demos.

pub mod error;

use error::TransportError;

/// Data carried by an inbound message event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageData {
    Text(String),
    /// Anything that is not a string (structured clones, blobs, ...). The
    /// protocol only speaks text, so these are always dropped.
    NonText { kind: String },
}

/// A message as delivered by the transport, before any validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMessage {
    /// Origin the transport reports for the sending document
    pub origin: String,
    pub data: MessageData,
}

impl RawMessage {
    pub fn text<O: Into<String>, D: Into<String>>(origin: O, data: D) -> Self {
        Self {
            origin: origin.into(),
            data: MessageData::Text(data.into()),
        }
    }
}

/// A reference to the other party's document, e.g. an iframe element on
/// the host side or `window.parent` on the embedded side
pub trait PeerHandle {
    /// Whether the peer document currently has a window able to receive
    /// messages
    fn is_available(&self) -> bool;

    /// Posts `data` to the peer window. The transport refuses delivery when
    /// the peer's actual origin differs from `target_origin`.
    fn post_message(&self, data: &str, target_origin: &str) -> Result<(), TransportError>;
}

/// A registered inbound message listener.
///
/// Delivery is push-based: the transport queues messages as they arrive and
/// the owner drains them. Dropping the receiver deregisters the listener.
pub trait MessageReceiver {
    /// Takes the next queued message, if any
    fn receive(&mut self) -> Option<RawMessage>;
}
