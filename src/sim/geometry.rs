//! Line segment geometry for the blocker and target bars
//!
//! Points are plain `glam::Vec2` values in screen space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point in screen space
pub type Point = Vec2;

/// An ordered pair of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// A vertical segment at `x` spanning `top..bottom`
    pub fn vertical(x: f32, top: f32, bottom: f32) -> Self {
        Self::new(Vec2::new(x, top), Vec2::new(x, bottom))
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Point at `offset` along the segment (0.0 = start, 1.0 = end)
    #[inline]
    pub fn point_at(&self, offset: f32) -> Point {
        self.start.lerp(self.end, offset)
    }

    /// Copy moved by `delta`
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    /// Smallest y of both endpoints
    #[inline]
    pub fn top(&self) -> f32 {
        self.start.y.min(self.end.y)
    }

    /// Largest y of both endpoints
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.start.y.max(self.end.y)
    }

    /// Sub-segment between two offsets
    pub fn slice(&self, from: f32, to: f32) -> Self {
        Self::new(self.point_at(from), self.point_at(to))
    }

    /// Split into `n` equal consecutive pieces, start to end
    pub fn split(&self, n: usize) -> Vec<LineSegment> {
        let n_f = n as f32;
        (0..n)
            .map(|i| self.slice(i as f32 / n_f, (i + 1) as f32 / n_f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_segment() {
        let seg = LineSegment::vertical(500.0, 60.0, 180.0);
        assert_eq!(seg.length(), 120.0);
        assert_eq!(seg.top(), 60.0);
        assert_eq!(seg.bottom(), 180.0);
        assert_eq!(seg.point_at(0.5), Vec2::new(500.0, 120.0));
    }

    #[test]
    fn test_translated_keeps_length() {
        let seg = LineSegment::vertical(10.0, 0.0, 70.0).translated(Vec2::new(0.0, 5.0));
        assert_eq!(seg.top(), 5.0);
        assert_eq!(seg.bottom(), 75.0);
    }

    #[test]
    fn test_split_covers_segment() {
        let seg = LineSegment::vertical(0.0, 0.0, 70.0);
        let pieces = seg.split(7);
        assert_eq!(pieces.len(), 7);
        assert_eq!(pieces[0].start, seg.start);
        assert_eq!(pieces[6].end, seg.end);
        assert!((pieces[3].start.y - 30.0).abs() < 1e-4);
    }
}
