use framesync_shared::SyncEvents;

use super::TestPair;

/// Events produced by one round of delivery
pub struct Exchanged {
    pub host: SyncEvents,
    /// `None` while no embedded document exists
    pub embedded: Option<SyncEvents>,
}

/// Lets both parties process whatever the other has posted so far.
///
/// The host drains first, then the embedded document, so anything the host
/// sends in reaction is only seen on the next round.
pub fn exchange(pair: &mut TestPair) -> Exchanged {
    let host = pair.host.receive();
    let embedded = pair.embedded.as_mut().map(|embedded| embedded.receive());
    Exchanged { host, embedded }
}
