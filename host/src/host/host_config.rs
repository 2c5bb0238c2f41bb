use serde::{Deserialize, Serialize};

use framesync_shared::{Origin, SyncConfig};

use crate::{Directory, FramesyncHostError};

/// Contains Config properties which will be used by the Host
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Protocol settings. `trusted_origin` is the embedded document's origin.
    pub sync: SyncConfig,
    /// Users available for filtering
    pub directory: Directory,
}

impl HostConfig {
    /// Config for an embedded document served from `child_origin`
    pub fn new(child_origin: &str) -> Result<Self, FramesyncHostError> {
        Ok(Self {
            sync: SyncConfig::new(Origin::new(child_origin)?),
            ..Self::default()
        })
    }

    /// Parses a JSON config document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FramesyncHostError> {
        serde_json::from_str(json).map_err(|error| FramesyncHostError::Config {
            reason: error.to_string(),
        })
    }
}
