//! Frame timing for the host loop

use std::time::Instant;

/// Turns wall-clock frames into simulation steps.
///
/// While paused no steps are produced. The first frame after a resume (or the
/// very first frame) yields a zero step, and any single gap is capped at
/// `max_dt`, so stalls are never replayed as a backlog of frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    paused: bool,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last: None,
            paused: false,
            max_dt,
        }
    }

    pub fn pause(&mut self) {
        if !self.paused {
            log::debug!("Frame clock paused");
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            log::debug!("Frame clock resumed");
        }
        self.paused = false;
        self.last = None;
    }

    /// Follow an external pause flag
    pub fn sync_paused(&mut self, paused: bool) {
        if paused {
            self.pause();
        } else if self.paused {
            self.resume();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Step length for a frame at `now`, or None while paused
    pub fn frame_at(&mut self, now: Instant) -> Option<f32> {
        if self.paused {
            return None;
        }
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32().min(self.max_dt),
            None => 0.0,
        };
        self.last = Some(now);
        Some(dt)
    }

    pub fn frame(&mut self) -> Option<f32> {
        self.frame_at(Instant::now())
    }
}
