use serde::{Deserialize, Serialize};

use framesync_shared::{Origin, SyncConfig};

use crate::FramesyncEmbeddedError;

/// How much of the host's state the embedded document mirrors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddedVariant {
    /// Only the selection filter
    Minimal,
    /// The selection filter and free text in both directions
    #[default]
    Full,
}

/// Contains Config properties which will be used by the Embedded party
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedConfig {
    /// Origin of the host page. Messages from anywhere else are dropped.
    pub parent_origin: Origin,
    #[serde(default)]
    pub variant: EmbeddedVariant,
}

impl EmbeddedConfig {
    pub fn new(parent_origin: &str) -> Result<Self, FramesyncEmbeddedError> {
        Ok(Self {
            parent_origin: Origin::new(parent_origin)?,
            variant: EmbeddedVariant::default(),
        })
    }

    pub fn with_variant(mut self, variant: EmbeddedVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Parses a JSON config document; `parent_origin` is required
    pub fn from_json(json: &str) -> Result<Self, FramesyncEmbeddedError> {
        serde_json::from_str(json).map_err(|error| FramesyncEmbeddedError::Config {
            reason: error.to_string(),
        })
    }

    /// Protocol settings for this party. The embedded document never
    /// performs the ready handshake: the host is the source of truth on load.
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig {
            trusted_origin: self.parent_origin.clone(),
            handshake_on_ready: false,
            sync_text: self.variant == EmbeddedVariant::Full,
        }
    }
}
