//! # Framesync Shared
//! Common functionality shared between framesync-host & framesync-embedded
//! crates: the envelope wire format, origin validation, the channel adapter
//! and the reconciler state machine.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

cfg_if! {
    if #[cfg(all(target_arch = "wasm32", not(feature = "wbindgen")))]
    {
        compile_error!("wasm target for 'framesync_shared' crate requires the 'wbindgen' feature to be enabled.");
    }
}

pub mod backends;
mod channel;
mod envelope;
mod origin;
mod reconciler;
mod role;
mod transport;
mod types;

pub use channel::{
    channel_adapter::ChannelAdapter,
    error::{ChannelError, InboundError},
};
pub use envelope::{
    codec::{decode, encode, TAG_FIELD},
    envelope::{Envelope, EnvelopeKind},
    error::DecodeError,
};
pub use origin::{
    error::OriginError,
    origin::{Origin, DEFAULT_TRUSTED_ORIGIN},
    origin_gate::OriginGate,
};
pub use reconciler::{
    events::{
        FilterChangedEvent, LinkStateEvent, RejectedEvent, RemoteTextEvent, SyncEvent, SyncEvents,
    },
    link_state::LinkState,
    local_state::LocalState,
    reconciler::Reconciler,
    sync_config::SyncConfig,
};
pub use role::{Filter, FilterParseError, Role, RoleParseError};
pub use transport::{error::TransportError, MessageData, MessageReceiver, PeerHandle, RawMessage};
pub use types::PartyType;
