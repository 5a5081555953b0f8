//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const CANNON: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const CANNONBALL: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const BLOCKER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Target pieces alternate between these two until hit
    pub const TARGET_EVEN: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const TARGET_ODD: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}
