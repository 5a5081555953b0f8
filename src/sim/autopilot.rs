//! Demo player
//!
//! Picks an unhit target piece and aims at it with a little seeded jitter.
//! It only ever reads snapshots, like any other input source, so the same
//! seed against the same frames always produces the same shots.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::snapshot::Snapshot;
use crate::consts::TARGET_PIECES;

/// Seeded aim-and-fire bot
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Max vertical aim error as a fraction of a piece length
    jitter: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jitter: 0.35,
        }
    }

    /// Where to aim for the next shot, or None when firing would be wasted
    /// (ball still in flight, game over, or nothing left to hit).
    pub fn next_shot(&mut self, snapshot: &Snapshot) -> Option<Vec2> {
        if snapshot.game_over || snapshot.cannonball.is_some() {
            return None;
        }
        let unhit: Vec<usize> = (0..TARGET_PIECES)
            .filter(|&i| !snapshot.hit_states[i])
            .collect();
        if unhit.is_empty() {
            return None;
        }

        let piece = unhit[self.rng.random_range(0..unhit.len())];
        let piece_len = snapshot.target.length() / TARGET_PIECES as f32;
        let center = snapshot
            .target
            .point_at((piece as f32 + 0.5) / TARGET_PIECES as f32);
        let error = self.rng.random_range(-self.jitter..=self.jitter) * piece_len;
        Some(Vec2::new(center.x, center.y + error))
    }
}
