use crate::role::Filter;

/// State owned exclusively by one party. Memory-resident only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalState {
    pub(crate) filter: Filter,
    /// Last text received from the peer; empty until something arrives
    pub(crate) remote_text: String,
    pub(crate) local_input_text: String,
}

impl LocalState {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn remote_text(&self) -> &str {
        &self.remote_text
    }

    pub fn local_input_text(&self) -> &str {
        &self.local_input_text
    }

    /// Whether anything has been received from the peer yet
    pub fn has_remote_text(&self) -> bool {
        !self.remote_text.is_empty()
    }
}
