//! Player and host preferences
//!
//! Persisted as JSON next to the game. A missing or broken file never stops
//! the game; it just falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, SIM_DT};
use crate::error::GameError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sound effects
    pub muted: bool,

    // === Frame pacing ===
    /// Target frames per second for the host loop
    pub frame_rate: u32,
    /// Longest step handed to the simulation after a stall (seconds)
    pub max_frame_dt: f32,

    // === HUD ===
    /// Log the HUD line every N frames in the headless demo (0 = never)
    pub hud_every: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            frame_rate: (1.0 / SIM_DT).round() as u32,
            max_frame_dt: MAX_FRAME_DT,

            hud_every: 30,
        }
    }
}

impl Settings {
    /// Seconds per frame at the configured rate
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp out-of-range values instead of rejecting the whole file
    fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.frame_rate = self.frame_rate.clamp(1, 1000);
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            self.max_frame_dt = MAX_FRAME_DT;
        }
    }
}
