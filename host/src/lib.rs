//! # Framesync Host
//! The host page's side of the protocol: owns the selection filter, mounts
//! and unmounts the embedded document, performs the ready handshake, and
//! filters the user directory for rendering.

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

mod directory;
mod error;
mod host;

pub use directory::{Directory, User};
pub use error::FramesyncHostError;
pub use framesync_shared::{
    FilterChangedEvent, LinkStateEvent, RejectedEvent, RemoteTextEvent, SyncEvent, SyncEvents,
};
pub use host::{Host, HostConfig, NO_REMOTE_TEXT_PLACEHOLDER};
