//! Data-driven game balance
//!
//! Everything that shapes difficulty lives here so it can be tweaked from a
//! JSON document without touching the simulation. Layout values are fractions
//! of the screen so the game plays the same at any resolution.

use std::cmp::Ordering;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HIT_REWARD, MISS_PENALTY, STARTING_TIME};
use crate::error::GameError;

/// Longest time value accepted from a tuning file (seconds)
const MAX_SECONDS: f32 = 86_400.0;

/// Gameplay tuning (times in seconds, sizes as screen fractions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Clock at the start of a game
    pub starting_time: f32,
    /// Deducted when the blocker stops a shot
    pub miss_penalty: f32,
    /// Added when an unhit target piece is struck
    pub hit_reward: f32,

    /// Blocker speed gained per blocker hit (fraction of screen height per second)
    pub blocker_speedup: f32,
    /// Target speed gained per target hit (fraction of screen height per second)
    pub target_speedup: f32,

    /// Blocker x position (fraction of width)
    pub blocker_x: f32,
    /// Blocker top/bottom at spawn (fractions of height)
    pub blocker_top: f32,
    pub blocker_bottom: f32,
    /// Blocker initial velocity (fraction of height per second, positive = down)
    pub blocker_velocity: f32,

    /// Target x position (fraction of width)
    pub target_x: f32,
    /// Target top/bottom at spawn (fractions of height)
    pub target_top: f32,
    pub target_bottom: f32,
    /// Target initial velocity (fraction of height per second, negative = up)
    pub target_velocity: f32,

    /// Cannon base radius (fraction of height)
    pub cannon_base_radius: f32,
    /// Barrel length (fraction of width)
    pub barrel_length: f32,
    /// Cannonball radius (fraction of width)
    pub ball_radius: f32,
    /// Cannonball speed (fraction of width per second)
    pub ball_speed: f32,
    /// Stroke width of the bars (fraction of width)
    pub line_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_time: STARTING_TIME.as_secs_f32(),
            miss_penalty: MISS_PENALTY.as_secs_f32(),
            hit_reward: HIT_REWARD.as_secs_f32(),

            blocker_speedup: 1.0 / 16.0,
            target_speedup: 1.0 / 16.0,

            blocker_x: 5.0 / 8.0,
            blocker_top: 1.0 / 8.0,
            blocker_bottom: 3.0 / 8.0,
            blocker_velocity: 1.0 / 2.0,

            target_x: 7.0 / 8.0,
            target_top: 1.0 / 8.0,
            target_bottom: 7.0 / 8.0,
            target_velocity: -1.0 / 4.0,

            cannon_base_radius: 1.0 / 18.0,
            barrel_length: 1.0 / 8.0,
            ball_radius: 1.0 / 36.0,
            ball_speed: 3.0 / 2.0,
            line_width: 1.0 / 24.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), GameError> {
        for (name, secs) in [
            ("starting_time", self.starting_time),
            ("miss_penalty", self.miss_penalty),
            ("hit_reward", self.hit_reward),
        ] {
            if !(0.0..=MAX_SECONDS).contains(&secs) {
                return Err(GameError::Config(format!(
                    "{} must be within 0..={}, got {}",
                    name, MAX_SECONDS, secs
                )));
            }
        }
        if self.blocker_top.partial_cmp(&self.blocker_bottom) != Some(Ordering::Less) {
            return Err(GameError::Config("blocker_top must be above blocker_bottom".into()));
        }
        if self.target_top.partial_cmp(&self.target_bottom) != Some(Ordering::Less) {
            return Err(GameError::Config("target_top must be above target_bottom".into()));
        }
        let positive = |v: f32| v.partial_cmp(&0.0) == Some(Ordering::Greater);
        if !(positive(self.ball_radius) && positive(self.ball_speed)) {
            return Err(GameError::Config("ball radius and speed must be positive".into()));
        }
        Ok(())
    }

    pub fn starting_time(&self) -> Duration {
        seconds(self.starting_time)
    }

    pub fn miss_penalty(&self) -> Duration {
        seconds(self.miss_penalty)
    }

    pub fn hit_reward(&self) -> Duration {
        seconds(self.hit_reward)
    }

    /// Resolve the fractional layout against concrete screen dimensions
    pub fn layout(&self, width: f32, height: f32) -> Layout {
        Layout {
            width,
            height,
            cannon_base: Vec2::new(0.0, height / 2.0),
            cannon_base_radius: height * self.cannon_base_radius,
            barrel_length: width * self.barrel_length,
            ball_radius: width * self.ball_radius,
            ball_speed: width * self.ball_speed,
            line_width: width * self.line_width,
            blocker_x: width * self.blocker_x,
            blocker_span: (height * self.blocker_top, height * self.blocker_bottom),
            blocker_velocity: height * self.blocker_velocity,
            blocker_speedup: height * self.blocker_speedup,
            target_x: width * self.target_x,
            target_span: (height * self.target_top, height * self.target_bottom),
            target_velocity: height * self.target_velocity,
            target_speedup: height * self.target_speedup,
        }
    }
}

/// Out-of-range values read as zero; `validate` reports them
fn seconds(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO)
}

/// Tuning resolved to pixels for one screen size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub cannon_base: Vec2,
    pub cannon_base_radius: f32,
    pub barrel_length: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub line_width: f32,
    pub blocker_x: f32,
    pub blocker_span: (f32, f32),
    pub blocker_velocity: f32,
    pub blocker_speedup: f32,
    pub target_x: f32,
    pub target_span: (f32, f32),
    pub target_velocity: f32,
    pub target_speedup: f32,
}
