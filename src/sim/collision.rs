//! Collision detection between the cannonball and the bars
//!
//! Both the ball and the bars move during a frame, so a plain overlap test at
//! the end of the step lets a fast ball tunnel straight through a thin bar.
//! Instead the ball is swept against the segment in the segment's own frame
//! (relative motion) and the first contact inside the step is reported.

use glam::Vec2;

use super::geometry::LineSegment;

/// First contact of a swept circle with a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Normalized time of contact within the step (0.0 = start, 1.0 = end)
    pub t: f32,
    /// Position along the segment at contact (0.0 = start, 1.0 = end)
    pub offset: f32,
    /// Ball center at contact (world space)
    pub center: Vec2,
}

/// Sweep a circle against a segment that translates rigidly over the step.
///
/// `segment_from`/`segment_to` are the segment's placements at the start and
/// end of the step; `center_from`/`center_to` the ball center's. The segment
/// is treated as a capsule: contacts on its side report the projected offset,
/// contacts on an end cap report 0.0 or 1.0. Returns the earliest contact, or
/// `None`.
pub fn sweep_circle_segment(
    segment_from: &LineSegment,
    segment_to: &LineSegment,
    center_from: Vec2,
    center_to: Vec2,
    radius: f32,
) -> Option<SweepHit> {
    let axis = segment_from.end - segment_from.start;
    let length = axis.length();
    if length <= 0.0 {
        return None; // Degenerate segment
    }

    // Work in the segment's frame: only the relative motion matters
    let segment_shift = segment_to.start - segment_from.start;
    let rel_start = center_from - segment_from.start;
    let rel_motion = (center_to - center_from) - segment_shift;

    let side = sweep_side(rel_start, rel_motion, axis / length, length, radius);
    let start_cap = sweep_point(rel_start, rel_motion, radius).map(|t| (t, 0.0));
    let end_cap = sweep_point(rel_start - axis, rel_motion, radius).map(|t| (t, 1.0));

    let (t, offset) = [side, start_cap, end_cap]
        .into_iter()
        .flatten()
        .min_by(|a, b| a.0.total_cmp(&b.0))?;

    Some(SweepHit {
        t,
        offset,
        center: center_from + (center_to - center_from) * t,
    })
}

/// Contact with the flat side of the segment: (t, offset)
fn sweep_side(rel_start: Vec2, rel_motion: Vec2, dir: Vec2, length: f32, radius: f32) -> Option<(f32, f32)> {
    let normal = Vec2::new(-dir.y, dir.x);
    let dist_start = rel_start.dot(normal);
    let closing = rel_motion.dot(normal);

    let t = if dist_start.abs() <= radius {
        // Already touching the line at the start of the step
        0.0
    } else {
        if closing == 0.0 {
            return None;
        }
        let t = (dist_start.signum() * radius - dist_start) / closing;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        t
    };

    let offset = (rel_start + rel_motion * t).dot(dir) / length;
    (0.0..=1.0).contains(&offset).then_some((t, offset))
}

/// Time a circle starting at `rel_start` from a fixed point (the origin)
/// first comes within `radius` of it while moving by `rel_motion`
fn sweep_point(rel_start: Vec2, rel_motion: Vec2, radius: f32) -> Option<f32> {
    let c = rel_start.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let a = rel_motion.length_squared();
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * rel_start.dot(rel_motion);
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / (2.0 * a);
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Map a segment offset to one of `pieces` equal sub-segments.
///
/// Pieces own their start and not their end, so a contact exactly on a
/// boundary belongs to the piece that begins there. Offsets outside `[0, 1]`
/// clamp to the first/last piece; 1.0 lands on the last piece.
pub fn piece_index(offset: f32, pieces: usize) -> usize {
    if pieces == 0 {
        return 0;
    }
    let scaled = (offset * pieces as f32).floor();
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled as usize).min(pieces - 1)
    }
}
