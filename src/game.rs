//! Host-facing game facade
//!
//! The host owns a `CannonGame`, forwards its frame callback to [`CannonGame::step`]
//! and reads snapshots and events back. Input may be published from any thread
//! through the shared [`Controls`].

use std::sync::Arc;

use crate::error::GameError;
use crate::platform::Controls;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

/// One game session
pub struct CannonGame {
    tuning: Tuning,
    state: Option<GameState>,
    controls: Arc<Controls>,
}

impl CannonGame {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            state: None,
            controls: Arc::new(Controls::new()),
        }
    }

    /// Handle for input threads
    pub fn controls(&self) -> Arc<Controls> {
        Arc::clone(&self.controls)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Lay out a fresh game for the given screen; counters reset, phase Ready
    pub fn new_game(&mut self, width: f32, height: f32) -> Result<(), GameError> {
        let state = GameState::new(&self.tuning, width, height)?;
        self.controls.aim.clear();
        self.controls.fire.take();
        log::info!(
            "New game {}x{} with {:.1}s on the clock",
            width,
            height,
            state.time_left.as_secs_f32()
        );
        self.state = Some(state);
        Ok(())
    }

    /// Publish the latest pointer position (any thread, last write wins)
    pub fn set_aim_target(&self, x: f32, y: f32) {
        self.controls.aim.set(x, y);
    }

    /// Launch a cannonball now. Ok(false) when one is already in flight or
    /// the game is over.
    pub fn fire(&mut self) -> Result<bool, GameError> {
        let aim = self.controls.aim.latest();
        let state = self.state_mut()?;
        if let Some(pointer) = aim {
            state.aim_at(pointer);
        }
        Ok(state.fire())
    }

    /// Advance by `dt` seconds; returns every event since the previous step
    pub fn step(&mut self, dt: f32) -> Result<Vec<GameEvent>, GameError> {
        let state = self.state.as_mut().ok_or(GameError::NotStarted)?;
        let input = TickInput {
            aim: self.controls.aim.latest(),
            fire: self.controls.fire.take(),
        };
        tick(state, &input, dt);
        Ok(state.drain_events())
    }

    /// Owned view of the current frame
    pub fn snapshot(&self) -> Result<Snapshot, GameError> {
        self.state().map(Snapshot::capture)
    }

    pub fn phase(&self) -> Option<GamePhase> {
        self.state.as_ref().map(|s| s.phase)
    }

    pub fn state(&self) -> Result<&GameState, GameError> {
        self.state.as_ref().ok_or(GameError::NotStarted)
    }

    fn state_mut(&mut self) -> Result<&mut GameState, GameError> {
        self.state.as_mut().ok_or(GameError::NotStarted)
    }
}

impl Default for CannonGame {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
