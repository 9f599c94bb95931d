//! Tap-feedback burst: a ring of hearts thrown out from one point.

use ratatui::style::Color;

use crate::glyphs::HEART_GLYPHS;
use crate::particle::Particle;
use crate::rng::Rng;

/// Particles per burst.
pub const BURST_COUNT: usize = 30;

/// Minimum and maximum launch speed (px per frame-step).
pub const SPEED_MIN: f32 = 5.0;
pub const SPEED_MAX: f32 = 10.0;

/// Spawn one burst at the given point. Angles are evenly distributed
/// around the full circle; speed is randomized per particle. No
/// gravity: bursts decay on travel alone.
pub fn spawn(rng: &mut Rng, x: f32, y: f32, color: Color) -> Vec<Particle> {
    (0..BURST_COUNT)
        .map(|i| {
            let angle = i as f32 / BURST_COUNT as f32 * std::f32::consts::TAU;
            let speed = rng.range_f32(SPEED_MIN, SPEED_MAX);
            let glyph = HEART_GLYPHS[i % HEART_GLYPHS.len()];
            Particle::new(
                x,
                y,
                angle.cos() * speed,
                angle.sin() * speed,
                0.0,
                glyph,
                color,
            )
        })
        .collect()
}
