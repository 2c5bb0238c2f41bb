use crate::role::Filter;

/// A message exchanged between the host page and the embedded document.
///
/// The set of variants is closed: anything else arriving on the channel is
/// rejected by [`decode`](super::codec::decode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Envelope {
    /// Communicates the active selection filter
    FilterUpdate { filter: Filter },
    /// Communicates a free-text value
    TextUpdate { text: String },
}

impl Envelope {
    pub fn filter_update<F: Into<Filter>>(filter: F) -> Self {
        Envelope::FilterUpdate {
            filter: filter.into(),
        }
    }

    pub fn text_update<S: Into<String>>(text: S) -> Self {
        Envelope::TextUpdate { text: text.into() }
    }

    pub fn kind(&self) -> EnvelopeKind {
        match self {
            Envelope::FilterUpdate { .. } => EnvelopeKind::FilterUpdate,
            Envelope::TextUpdate { .. } => EnvelopeKind::TextUpdate,
        }
    }
}

/// Discriminant of an [`Envelope`], carried on the wire in the `type` field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    FilterUpdate,
    TextUpdate,
}

impl EnvelopeKind {
    pub const ALL: [EnvelopeKind; 2] = [EnvelopeKind::FilterUpdate, EnvelopeKind::TextUpdate];

    /// Wire tag. These names are shared with existing embedded documents and
    /// must not change.
    pub fn tag(&self) -> &'static str {
        match self {
            EnvelopeKind::FilterUpdate => "object",
            EnvelopeKind::TextUpdate => "string",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        EnvelopeKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}
