use thiserror::Error;

use framesync_shared::OriginError;

/// Errors that can occur while setting up an Embedded party
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramesyncEmbeddedError {
    /// Parent origin rejected
    #[error("Invalid parent origin: {0}")]
    Origin(#[from] OriginError),

    /// Configuration text could not be parsed
    #[error("Failed to parse embedded configuration: {reason}")]
    Config { reason: String },
}
