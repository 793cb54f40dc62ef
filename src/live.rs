//! Change notification hub backing the realtime snapshot stream.
//!
//! Mutating handlers publish the owning user's id after every successful
//! write; each `/api/stream` subscriber listening for that user re-reads
//! the full snapshot and re-runs the metrics recomputation. Subscribers
//! receive whole snapshots, never deltas, so a missed notification is
//! corrected by the next one.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct SnapshotHub {
    tx: broadcast::Sender<i64>,
}

impl SnapshotHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Announce that `user_id`'s data changed. No-op when nobody listens.
    pub fn notify(&self, user_id: i64) {
        let _ = self.tx.send(user_id);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<i64> {
        self.tx.subscribe()
    }
}

impl Default for SnapshotHub {
    fn default() -> Self {
        Self::new()
    }
}
