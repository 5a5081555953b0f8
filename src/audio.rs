//! Sound effect dispatch
//!
//! The simulation only emits events; this module maps them to sound effects
//! and hands them to whatever player the host plugs in.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Cannonball launched
    CannonFired,
    /// Cannonball stopped by the blocker
    BlockerHit,
    /// Target piece hit
    TargetHit,
}

impl SoundEffect {
    /// The sound a game event makes, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CannonFired => Some(SoundEffect::CannonFired),
            GameEvent::BlockerHit => Some(SoundEffect::BlockerHit),
            GameEvent::TargetHit { .. } => Some(SoundEffect::TargetHit),
            GameEvent::Missed | GameEvent::GameOver(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::CannonFired => "cannon_fire",
            SoundEffect::BlockerHit => "blocker_hit",
            SoundEffect::TargetHit => "target_hit",
        }
    }
}

/// Something that can actually make noise
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink for headless runs: every sound becomes a log line
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::info!("♪ {} (vol {:.2})", effect.as_str(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: SoundSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: SoundSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volumes and mute state from player settings
    pub fn with_settings(sink: S, settings: &Settings) -> Self {
        let mut manager = Self::new(sink);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the sounds for a batch of events; returns how many were played
    pub fn dispatch(&mut self, events: &[GameEvent]) -> usize {
        let mut played = 0;
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            if self.effective_volume() > 0.0 {
                played += 1;
            }
            self.play(effect);
        }
        played
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameOverReport;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl SoundSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    fn events() -> Vec<GameEvent> {
        vec![
            GameEvent::CannonFired,
            GameEvent::TargetHit { piece: 4 },
            GameEvent::Missed,
            GameEvent::GameOver(GameOverReport {
                win: true,
                shots_fired: 7,
                total_elapsed: Duration::from_secs(9),
            }),
        ]
    }

    #[test]
    fn test_dispatch_maps_events() {
        let mut audio = AudioManager::new(Recorder::default());
        assert_eq!(audio.dispatch(&events()), 2);
        let played: Vec<SoundEffect> = audio.sink().0.iter().map(|(e, _)| *e).collect();
        assert_eq!(played, vec![SoundEffect::CannonFired, SoundEffect::TargetHit]);
    }

    #[test]
    fn test_volume_and_mute() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(2.0);
        audio.play(SoundEffect::BlockerHit);
        assert_eq!(audio.sink().0, vec![(SoundEffect::BlockerHit, 0.5)]);

        audio.set_muted(true);
        assert_eq!(audio.dispatch(&events()), 0);
        assert_eq!(audio.sink().0.len(), 1);
    }

    #[test]
    fn test_with_settings() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let mut audio = AudioManager::with_settings(Recorder::default(), &settings);
        audio.play(SoundEffect::CannonFired);
        assert!(audio.sink().0.is_empty());
    }
}
