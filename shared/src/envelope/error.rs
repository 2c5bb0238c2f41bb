use thiserror::Error;

/// Errors that can occur while decoding an inbound transport string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The transport string is not a well-formed envelope (SECURITY: untrusted input)
    #[error("Malformed envelope: {reason}")]
    Malformed { reason: String },

    /// The envelope carries a tag that names no known variant
    #[error("Unknown envelope variant '{tag}'. The message is ignored")]
    UnknownVariant { tag: String },
}

impl DecodeError {
    pub(crate) fn malformed<R: ToString>(reason: R) -> Self {
        DecodeError::Malformed {
            reason: reason.to_string(),
        }
    }
}
