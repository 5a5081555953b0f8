//! Render adapter
//!
//! Turns a [`Snapshot`] into a flat triangle list the host can upload to
//! whatever GPU or canvas it draws with. Nothing here touches the simulation.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::Snapshot;

/// Triangles per circle
const CIRCLE_SEGMENTS: u32 = 24;

/// Build the vertex list for one frame, back to front
pub fn build_frame(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(512);
    let line_width = snapshot.line_width;

    // Cannon: barrel then base
    vertices.extend(shapes::thick_line(
        snapshot.cannon_base,
        snapshot.barrel_end,
        line_width * 1.5,
        colors::CANNON,
    ));
    vertices.extend(shapes::circle(
        snapshot.cannon_base,
        snapshot.cannon_base_radius,
        colors::CANNON,
        CIRCLE_SEGMENTS,
    ));

    if let Some(ball) = snapshot.cannonball {
        vertices.extend(shapes::circle(
            ball.pos,
            ball.radius,
            colors::CANNONBALL,
            CIRCLE_SEGMENTS,
        ));
    }

    vertices.extend(shapes::thick_line(
        snapshot.blocker.start,
        snapshot.blocker.end,
        line_width,
        colors::BLOCKER,
    ));

    // Hit pieces are not drawn
    for (i, (piece, hit)) in snapshot.target_pieces().enumerate() {
        if hit {
            continue;
        }
        let color = if i % 2 == 0 {
            colors::TARGET_EVEN
        } else {
            colors::TARGET_ODD
        };
        vertices.extend(shapes::thick_line(piece.start, piece.end, line_width, color));
    }

    vertices
}

/// Raw bytes for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_PIECES;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    fn snapshot() -> Snapshot {
        let state = GameState::new(&Tuning::default(), 800.0, 480.0).unwrap();
        Snapshot::capture(&state)
    }

    #[test]
    fn test_frame_vertex_count() {
        let snap = snapshot();
        let verts = build_frame(&snap);
        // barrel + base + blocker + 7 pieces
        let expected = 6 + (CIRCLE_SEGMENTS * 3) as usize + 6 + 6 * TARGET_PIECES;
        assert_eq!(verts.len(), expected);
    }

    #[test]
    fn test_hit_pieces_are_skipped() {
        let mut snap = snapshot();
        let full = build_frame(&snap).len();
        snap.hit_states[0] = true;
        snap.hit_states[5] = true;
        assert_eq!(build_frame(&snap).len(), full - 12);
    }

    #[test]
    fn test_bytes_match_layout() {
        let verts = build_frame(&snapshot());
        assert_eq!(as_bytes(&verts).len(), verts.len() * std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }
}
