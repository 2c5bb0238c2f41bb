use super::origin::Origin;

/// Security boundary for inbound messages.
///
/// Any document holding a reference to our window can post to it, so every
/// inbound message has its declared source origin checked here before its
/// payload is even parsed.
#[derive(Clone, Debug, Default)]
pub struct OriginGate {
    trusted: Origin,
}

impl OriginGate {
    pub fn new(trusted: Origin) -> Self {
        Self { trusted }
    }

    pub fn trusted(&self) -> &Origin {
        &self.trusted
    }

    /// Exact string match; no wildcarding, no scheme or port normalization
    pub fn is_trusted(&self, source_origin: &str) -> bool {
        source_origin == self.trusted.as_str()
    }
}
