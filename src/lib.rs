//! Cannon Block Breaker - fire a cannonball through a moving blocker at a
//! segmented target before the clock runs out.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, timing)
//! - `game`: Boundary facade driven by the host (`new_game`, `step`, `fire`, ...)
//! - `platform`: Cross-thread input latches, snapshot publishing, frame clock
//! - `renderer`: Snapshot to vertex list conversion
//! - `audio`: Sound event dispatch
//! - `tuning` / `settings`: Data-driven balance and player preferences

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::GameError;
pub use game::CannonGame;
pub use settings::Settings;
pub use tuning::Tuning;

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Sections in the target
    pub const TARGET_PIECES: usize = 7;
    /// Seconds deducted when the blocker stops a shot
    pub const MISS_PENALTY: Duration = Duration::from_secs(2);
    /// Seconds added when a target piece is hit
    pub const HIT_REWARD: Duration = Duration::from_secs(3);
    /// Clock at the start of a game
    pub const STARTING_TIME: Duration = Duration::from_secs(10);

    /// Nominal frame step for the demo host (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest single step the frame clock hands out (no catch-up after stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Clamp an aim angle to the forward half-plane [-π/2, π/2]
#[inline]
pub fn clamp_aim_angle(angle: f32) -> f32 {
    if angle.is_nan() {
        return 0.0;
    }
    angle.clamp(-FRAC_PI_2, FRAC_PI_2)
}

/// Unit direction for an angle measured from +x (screen space, y down)
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
