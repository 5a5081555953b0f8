//! The cannon and its cannonball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{clamp_aim_angle, direction};

/// The player's cannon, anchored at the left edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cannon {
    pub base: Vec2,
    pub base_radius: f32,
    pub barrel_length: f32,
    /// Aim angle from +x (radians, screen space, clamped to the forward half-plane)
    pub angle: f32,
}

impl Cannon {
    /// A cannon pointing horizontally
    pub fn new(base: Vec2, base_radius: f32, barrel_length: f32) -> Self {
        Self {
            base,
            base_radius,
            barrel_length,
            angle: 0.0,
        }
    }

    /// Turn the barrel toward a pointer position
    pub fn aim_at(&mut self, pointer: Vec2) {
        let delta = pointer - self.base;
        self.angle = clamp_aim_angle(delta.y.atan2(delta.x));
    }

    #[inline]
    pub fn barrel_end(&self) -> Vec2 {
        self.base + direction(self.angle) * self.barrel_length
    }

    /// Build a cannonball leaving the base along the current aim
    pub fn launch(&self, speed: f32, radius: f32) -> Cannonball {
        Cannonball {
            pos: Vec2::new(self.base.x + radius, self.base.y),
            vel: direction(self.angle) * speed,
            radius,
        }
    }
}

/// A cannonball in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cannonball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Cannonball {
    /// Advance by `dt` seconds (constant velocity)
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// True once any edge of the ball crosses the play area's edge
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.pos.x + self.radius > width
            || self.pos.x - self.radius < 0.0
            || self.pos.y + self.radius > height
            || self.pos.y - self.radius < 0.0
    }
}
