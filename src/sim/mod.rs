//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only advances through `tick`
//! - Seeded RNG only (autopilot)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod bar;
pub mod cannon;
pub mod collision;
pub mod geometry;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use bar::{MovingBar, Target};
pub use cannon::{Cannon, Cannonball};
pub use collision::{SweepHit, piece_index, sweep_circle_segment};
pub use geometry::{LineSegment, Point};
pub use snapshot::{BallView, Snapshot};
pub use state::{GameEvent, GameOverReport, GamePhase, GameState, TimeRules};
pub use tick::{TickInput, tick};
