//! Immutable frame snapshot for renderers and UI

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::LineSegment;
use super::state::{GameOverReport, GamePhase, GameState};
use crate::consts::TARGET_PIECES;

/// Cannonball as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Owned copy of everything needed to draw one frame.
///
/// Built by value from `GameState`; it never borrows live simulation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub width: f32,
    pub height: f32,
    pub line_width: f32,
    pub cannon_base: Vec2,
    pub cannon_base_radius: f32,
    pub barrel_end: Vec2,
    pub cannonball: Option<BallView>,
    pub blocker: LineSegment,
    pub target: LineSegment,
    pub hit_states: [bool; TARGET_PIECES],
    pub pieces_hit: u32,
    pub time_left: Duration,
    pub shots_fired: u32,
    pub game_over: bool,
    pub outcome: Option<GameOverReport>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            width: state.layout.width,
            height: state.layout.height,
            line_width: state.layout.line_width,
            cannon_base: state.cannon.base,
            cannon_base_radius: state.cannon.base_radius,
            barrel_end: state.cannon.barrel_end(),
            cannonball: state.cannonball.map(|ball| BallView {
                pos: ball.pos,
                radius: ball.radius,
            }),
            blocker: state.blocker.segment,
            target: state.target.bar.segment,
            hit_states: state.target.hit_states,
            pieces_hit: state.target.pieces_hit,
            time_left: state.time_left,
            shots_fired: state.shots_fired,
            game_over: state.is_over(),
            outcome: state.outcome,
        }
    }

    /// Target pieces paired with their hit flag, start to end
    pub fn target_pieces(&self) -> impl Iterator<Item = (LineSegment, bool)> + '_ {
        self.target
            .split(TARGET_PIECES)
            .into_iter()
            .zip(self.hit_states.iter().copied())
    }
}
