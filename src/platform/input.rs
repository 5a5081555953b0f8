//! Cross-thread input latches
//!
//! Input arrives on whatever thread the host delivers touches on, while the
//! simulation runs on its own thread. Each input is a single latched slot:
//! the latest write wins and the simulation reads it once per step.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use glam::Vec2;

/// Latest pointer coordinate, packed into one atomic word
#[derive(Debug, Default)]
pub struct AimLatch {
    bits: AtomicU64,
    set: AtomicBool,
}

impl AimLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a pointer position (any thread)
    pub fn set(&self, x: f32, y: f32) {
        let bits = ((x.to_bits() as u64) << 32) | y.to_bits() as u64;
        self.bits.store(bits, Ordering::Release);
        self.set.store(true, Ordering::Release);
    }

    /// Most recent pointer position, if one was ever published
    pub fn latest(&self) -> Option<Vec2> {
        if !self.set.load(Ordering::Acquire) {
            return None;
        }
        let bits = self.bits.load(Ordering::Acquire);
        Some(Vec2::new(
            f32::from_bits((bits >> 32) as u32),
            f32::from_bits(bits as u32),
        ))
    }

    /// Forget the last position (new game)
    pub fn clear(&self) {
        self.set.store(false, Ordering::Release);
    }
}

/// One-shot flag: set from any thread, consumed by the simulation
#[derive(Debug, Default)]
pub struct FireLatch(AtomicBool);

impl FireLatch {
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consume a pending request
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

/// Everything the host may poke from outside the simulation thread
#[derive(Debug, Default)]
pub struct Controls {
    pub aim: AimLatch,
    pub fire: FireLatch,
    paused: AtomicBool,
    quit: AtomicBool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause/resume request (e.g. visibility loss)
    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Release);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Release);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}
