//! Platform abstraction layer
//!
//! Glue between the single-threaded simulation and a host that delivers
//! input and draws frames from other threads:
//! - Input latches (aim, fire, pause)
//! - Frame timing
//! - Published snapshots for renderers

pub mod input;
pub mod time;

pub use input::{AimLatch, Controls, FireLatch};
pub use time::FrameClock;

use std::sync::{Arc, Mutex};

use crate::sim::Snapshot;

/// Holds the most recently published snapshot.
///
/// The simulation publishes after each step; readers clone the `Arc` and
/// never see a half-written frame.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    latest: Mutex<Option<Arc<Snapshot>>>,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: Snapshot) {
        let mut slot = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::new(snapshot));
    }

    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_publish_replaces_previous() {
        let cell = SnapshotCell::new();
        assert!(cell.latest().is_none());

        let mut state = GameState::new(&Tuning::default(), 800.0, 480.0).unwrap();
        cell.publish(Snapshot::capture(&state));
        let first = cell.latest().unwrap();

        state.shots_fired = 3;
        cell.publish(Snapshot::capture(&state));
        assert_eq!(first.shots_fired, 0);
        assert_eq!(cell.latest().unwrap().shots_fired, 3);
    }
}
