//! Stepped particles shared by the burst and firework effects.
//!
//! Physics run in logical pixels so the decay constants are
//! resolution-independent; positions are mapped to cells only at
//! render time.

use ratatui::style::Color;

/// Logical pixels per cell, horizontally.
pub const PX_PER_CELL_X: f32 = 8.0;
/// Logical pixels per cell, vertically (cells are about twice as tall
/// as they are wide).
pub const PX_PER_CELL_Y: f32 = 16.0;

/// Vertical displacement (logical px) at which a particle is removed.
pub const FADE_DISTANCE_PX: f32 = 200.0;

/// A single stepped particle.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in logical pixels.
    pub x: f32,
    pub y: f32,
    /// Velocity in logical pixels per frame-step.
    pub vx: f32,
    pub vy: f32,
    /// Constant vertical acceleration per frame-step (gravity); zero
    /// for bursts.
    pub ay: f32,
    /// Vertical offset from the spawn point, signed (down is positive).
    pub dy: f32,
    pub glyph: char,
    pub color: Color,
}

impl Particle {
    /// Spawn at a point with the given velocity.
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, ay: f32, glyph: char, color: Color) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            ay,
            dy: 0.0,
            glyph,
            color,
        }
    }

    /// Advance by `dt` frame-steps (1.0 = one nominal animation frame).
    pub fn step(&mut self, dt: f32) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.dy += self.vy * dt;
        self.vy += self.ay * dt;
    }

    /// Linear fade with downward travel, clamped to [0, 1].
    pub fn opacity(&self) -> f32 {
        (1.0 - self.dy / FADE_DISTANCE_PX).clamp(0.0, 1.0)
    }

    /// A particle expires once its vertical displacement magnitude
    /// reaches the fade distance.
    pub fn expired(&self) -> bool {
        self.dy.abs() >= FADE_DISTANCE_PX
    }
}
