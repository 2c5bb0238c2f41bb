use serde::{Deserialize, Serialize};

use crate::origin::origin::Origin;

/// Contains Config properties which will be used by a Reconciler
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// The only origin messages are accepted from, and the target origin of
    /// every outbound post
    pub trusted_origin: Origin,
    /// Push the current filter to the peer as soon as it signals readiness.
    /// The host needs this; an embedded document normally must not do it,
    /// or it would overwrite the host's filter with its own default.
    pub handshake_on_ready: bool,
    /// Mirror free text in both directions. When disabled only the filter
    /// is synchronized.
    pub sync_text: bool,
}

impl SyncConfig {
    pub fn new(trusted_origin: Origin) -> Self {
        Self {
            trusted_origin,
            ..Self::default()
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            trusted_origin: Origin::default(),
            handshake_on_ready: true,
            sync_text: true,
        }
    }
}
