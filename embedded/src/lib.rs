//! # Framesync Embedded
//! The embedded document's side of the protocol: talks to `window.parent`,
//! mirrors the host's selection filter, and optionally exchanges free text.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use framesync_shared::{
        decode, encode, Envelope, EnvelopeKind, Filter, LinkState, MessageData, MessageReceiver,
        Origin, PeerHandle, RawMessage, Role, SyncConfig, TransportError,
    };
}

mod embedded;
mod error;

pub use embedded::{Embedded, EmbeddedConfig, EmbeddedVariant};
pub use error::FramesyncEmbeddedError;
pub use framesync_shared::{
    FilterChangedEvent, LinkStateEvent, RejectedEvent, RemoteTextEvent, SyncEvent, SyncEvents,
};
