use std::{mem, vec::IntoIter};

use crate::{channel::error::InboundError, role::Filter};

use super::link_state::LinkState;

/// Everything that happened to a party since the last drain.
///
/// Only changes the rendering layer did not cause itself are recorded: state
/// arriving from the peer, link transitions, and dropped inbound messages
/// (for diagnostics; these are never meant to be shown as UI errors).
#[derive(Debug)]
pub struct SyncEvents {
    filter_changes: Vec<Filter>,
    remote_texts: Vec<String>,
    link_changes: Vec<LinkState>,
    rejections: Vec<InboundError>,
    empty: bool,
}

impl SyncEvents {
    pub(crate) fn new() -> Self {
        Self {
            filter_changes: Vec::new(),
            remote_texts: Vec::new(),
            link_changes: Vec::new(),
            rejections: Vec::new(),
            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: SyncEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: SyncEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_filter_change(&mut self, filter: Filter) {
        self.filter_changes.push(filter);
        self.empty = false;
    }

    pub(crate) fn push_remote_text(&mut self, text: String) {
        self.remote_texts.push(text);
        self.empty = false;
    }

    pub(crate) fn push_link_change(&mut self, state: LinkState) {
        self.link_changes.push(state);
        self.empty = false;
    }

    pub(crate) fn push_rejection(&mut self, error: InboundError) {
        self.rejections.push(error);
        self.empty = false;
    }

    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl Default for SyncEvents {
    fn default() -> Self {
        Self::new()
    }
}

// Event Trait
pub trait SyncEvent {
    type Iter;

    fn iter(events: &mut SyncEvents) -> Self::Iter;

    fn has(events: &SyncEvents) -> bool;
}

// FilterChangedEvent
pub struct FilterChangedEvent;
impl SyncEvent for FilterChangedEvent {
    type Iter = IntoIter<Filter>;

    fn iter(events: &mut SyncEvents) -> Self::Iter {
        let list = mem::take(&mut events.filter_changes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SyncEvents) -> bool {
        !events.filter_changes.is_empty()
    }
}

// RemoteTextEvent
pub struct RemoteTextEvent;
impl SyncEvent for RemoteTextEvent {
    type Iter = IntoIter<String>;

    fn iter(events: &mut SyncEvents) -> Self::Iter {
        let list = mem::take(&mut events.remote_texts);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SyncEvents) -> bool {
        !events.remote_texts.is_empty()
    }
}

// LinkStateEvent
pub struct LinkStateEvent;
impl SyncEvent for LinkStateEvent {
    type Iter = IntoIter<LinkState>;

    fn iter(events: &mut SyncEvents) -> Self::Iter {
        let list = mem::take(&mut events.link_changes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SyncEvents) -> bool {
        !events.link_changes.is_empty()
    }
}

// RejectedEvent
pub struct RejectedEvent;
impl SyncEvent for RejectedEvent {
    type Iter = IntoIter<InboundError>;

    fn iter(events: &mut SyncEvents) -> Self::Iter {
        let list = mem::take(&mut events.rejections);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SyncEvents) -> bool {
        !events.rejections.is_empty()
    }
}
