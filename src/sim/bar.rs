//! Oscillating bars: the blocker and the segmented target

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::piece_index;
use super::geometry::LineSegment;
use crate::consts::TARGET_PIECES;

/// A vertical segment bouncing between two y bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingBar {
    pub segment: LineSegment,
    /// Signed speed along y (pixels/second, positive = down)
    pub velocity: f32,
    /// Smallest y the segment may reach
    pub min_y: f32,
    /// Largest y the segment may reach
    pub max_y: f32,
}

impl MovingBar {
    pub fn new(segment: LineSegment, velocity: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            segment,
            velocity,
            min_y,
            max_y,
        }
    }

    /// Advance by `dt` seconds, bouncing off the bounds.
    ///
    /// On reaching a bound the segment is placed exactly on it and the
    /// velocity turns to point away from it; the overshoot is discarded.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let height = self.segment.bottom() - self.segment.top();
        self.segment = self.segment.translated(Vec2::new(0.0, self.velocity * dt));

        let top = self.segment.top();
        let bottom = self.segment.bottom();
        if top <= self.min_y {
            self.set_span(self.min_y, self.min_y + height);
            self.velocity = self.velocity.abs();
        } else if bottom >= self.max_y {
            self.set_span(self.max_y - height, self.max_y);
            self.velocity = -self.velocity.abs();
        }
    }

    /// Place the segment so it covers exactly `top..bottom`, keeping its orientation
    fn set_span(&mut self, top: f32, bottom: f32) {
        if self.segment.start.y <= self.segment.end.y {
            self.segment.start.y = top;
            self.segment.end.y = bottom;
        } else {
            self.segment.start.y = bottom;
            self.segment.end.y = top;
        }
    }

    /// Grow the speed by `increment` without changing direction
    pub fn speed_up(&mut self, increment: f32) {
        let direction = if self.velocity < 0.0 { -1.0 } else { 1.0 };
        self.velocity = direction * (self.velocity.abs() + increment);
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.abs()
    }
}

/// The target: a moving bar made of individually hittable pieces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub bar: MovingBar,
    /// Hit flag per piece, start (top) to end (bottom)
    pub hit_states: [bool; TARGET_PIECES],
    /// Number of distinct pieces hit so far
    pub pieces_hit: u32,
}

impl Target {
    pub fn new(bar: MovingBar) -> Self {
        Self {
            bar,
            hit_states: [false; TARGET_PIECES],
            pieces_hit: 0,
        }
    }

    /// Piece containing `offset` along the target
    pub fn piece_at(&self, offset: f32) -> usize {
        piece_index(offset, TARGET_PIECES)
    }

    pub fn is_hit(&self, index: usize) -> bool {
        self.hit_states.get(index).copied().unwrap_or(false)
    }

    /// Mark a piece as hit. Returns true only the first time a piece is hit;
    /// repeat hits and out-of-range indices change nothing.
    pub fn register_hit(&mut self, index: usize) -> bool {
        match self.hit_states.get_mut(index) {
            Some(hit) if !*hit => {
                *hit = true;
                self.pieces_hit += 1;
                true
            }
            _ => false,
        }
    }

    pub fn all_hit(&self) -> bool {
        self.pieces_hit as usize == TARGET_PIECES
    }
}
