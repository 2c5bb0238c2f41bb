/// Lifecycle of the link to the peer document.
///
/// ```text
///   Unmounted --mount--> MountedAwaitingReady --ready--> Ready
///       ^                         |                        |
///       +---------unmount---------+--------unmount---------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinkState {
    #[default]
    Unmounted,
    MountedAwaitingReady,
    Ready,
}

impl LinkState {
    pub fn is_mounted(&self) -> bool {
        !matches!(self, LinkState::Unmounted)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LinkState::Ready)
    }
}
