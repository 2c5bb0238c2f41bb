use thiserror::Error;

use framesync_shared::OriginError;

/// Errors that can occur while setting up a Host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramesyncHostError {
    /// Trusted origin rejected
    #[error("Invalid trusted origin: {0}")]
    Origin(#[from] OriginError),

    /// Configuration text could not be parsed
    #[error("Failed to parse host configuration: {reason}")]
    Config { reason: String },

    /// Two directory records share an id
    #[error("Duplicate user id '{id}' in directory. Record ids must be unique")]
    DuplicateUserId { id: String },
}
