use thiserror::Error;

/// Errors that can occur when configuring a trusted origin
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OriginError {
    /// No origin was given
    #[error("Trusted origin must not be empty")]
    Empty,

    /// The `*` wildcard would let the transport deliver to any document
    #[error("Trusted origin must not be the '*' wildcard. It is also used as the postMessage target origin")]
    Wildcard,

    /// Origins never contain whitespace; this is almost always a config typo
    #[error("Trusted origin '{value}' contains whitespace")]
    Whitespace { value: String },
}
