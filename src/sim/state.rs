//! Game state and core simulation types
//!
//! `GameState` exclusively owns every entity. It is only ever mutated by the
//! simulation thread, one step at a time.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bar::{MovingBar, Target};
use super::cannon::{Cannon, Cannonball};
use super::geometry::LineSegment;
use crate::error::GameError;
use crate::tuning::{Layout, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Freshly laid out, waiting for the first step
    Ready,
    /// Active gameplay
    Playing,
    /// Clock ran out or every piece was hit; frozen until the next game
    GameOver,
}

/// Final result handed to the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverReport {
    /// True when every target piece was hit
    pub win: bool,
    pub shots_fired: u32,
    pub total_elapsed: Duration,
}

/// Things that happened during a step, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cannonball left the barrel
    CannonFired,
    /// The blocker stopped the cannonball
    BlockerHit,
    /// A fresh target piece was hit
    TargetHit { piece: usize },
    /// The cannonball left the screen without hitting anything
    Missed,
    /// The game ended (emitted once per game)
    GameOver(GameOverReport),
}

/// Time rules resolved from tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRules {
    pub miss_penalty: Duration,
    pub hit_reward: Duration,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Pixel layout for the current screen
    pub layout: Layout,
    pub rules: TimeRules,
    /// Remaining clock; saturates at zero
    pub time_left: Duration,
    /// Simulated time since the game started
    pub total_elapsed: Duration,
    pub shots_fired: u32,
    pub blocker: MovingBar,
    pub target: Target,
    pub cannon: Cannon,
    /// Present only while a ball is in flight
    pub cannonball: Option<Cannonball>,
    /// Set exactly once, when the game ends
    pub outcome: Option<GameOverReport>,
    /// Events not yet collected by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out a fresh game for the given screen
    pub fn new(tuning: &Tuning, width: f32, height: f32) -> Result<Self, GameError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GameError::InvalidScreen { width, height });
        }
        tuning.validate()?;
        let layout = tuning.layout(width, height);

        let (blocker_top, blocker_bottom) = layout.blocker_span;
        let blocker = MovingBar::new(
            LineSegment::vertical(layout.blocker_x, blocker_top, blocker_bottom),
            layout.blocker_velocity,
            0.0,
            height,
        );

        let (target_top, target_bottom) = layout.target_span;
        let target = Target::new(MovingBar::new(
            LineSegment::vertical(layout.target_x, target_top, target_bottom),
            layout.target_velocity,
            0.0,
            height,
        ));

        let cannon = Cannon::new(
            layout.cannon_base,
            layout.cannon_base_radius,
            layout.barrel_length,
        );

        Ok(Self {
            phase: GamePhase::Ready,
            layout,
            rules: TimeRules {
                miss_penalty: tuning.miss_penalty(),
                hit_reward: tuning.hit_reward(),
            },
            time_left: tuning.starting_time(),
            total_elapsed: Duration::ZERO,
            shots_fired: 0,
            blocker,
            target,
            cannon,
            cannonball: None,
            outcome: None,
            events: Vec::new(),
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn pieces_hit(&self) -> u32 {
        self.target.pieces_hit
    }

    /// Point the barrel at a pointer position
    pub fn aim_at(&mut self, pointer: Vec2) {
        if !self.is_over() {
            self.cannon.aim_at(pointer);
        }
    }

    /// Launch a cannonball along the current aim.
    ///
    /// Returns false (and changes nothing) while a ball is already in flight
    /// or after the game ended.
    pub fn fire(&mut self) -> bool {
        if self.is_over() || self.cannonball.is_some() {
            return false;
        }
        self.cannonball = Some(self.cannon.launch(self.layout.ball_speed, self.layout.ball_radius));
        self.shots_fired += 1;
        self.events.push(GameEvent::CannonFired);
        true
    }

    /// Enter GameOver and publish the report. Only the first call has an effect.
    pub fn finish(&mut self) {
        if self.is_over() {
            return;
        }
        let report = GameOverReport {
            win: self.target.all_hit(),
            shots_fired: self.shots_fired,
            total_elapsed: self.total_elapsed,
        };
        self.phase = GamePhase::GameOver;
        self.outcome = Some(report);
        self.events.push(GameEvent::GameOver(report));
        log::info!(
            "Game over: {} after {} shots in {:.1}s",
            if report.win { "win" } else { "loss" },
            report.shots_fired,
            report.total_elapsed.as_secs_f32()
        );
    }

    /// Take every event emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
