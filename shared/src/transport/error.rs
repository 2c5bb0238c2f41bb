use thiserror::Error;

/// Errors reported by a window-level transport backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The peer document has no window yet (not navigated or not loaded) or it has been torn down
    #[error("Peer window is not available. The embedded document has not loaded yet or has been torn down")]
    WindowUnavailable,

    /// The underlying postMessage call threw
    #[error("postMessage to '{target_origin}' failed: {reason}")]
    PostFailed {
        target_origin: String,
        reason: String,
    },

    /// The message listener could not be attached to the window
    #[error("Failed to register message listener: {reason}")]
    ListenerRegistration { reason: String },
}
