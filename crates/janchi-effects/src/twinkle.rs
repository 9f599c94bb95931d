//! Static twinkle star field for the intro scene.

use crate::glyphs::TWINKLE_GLYPHS;
use crate::rng::Rng;

/// Twinkle oscillation period.
const TWINKLE_PERIOD_MS: u64 = 3_000;

/// One static star with a randomized twinkle phase.
#[derive(Debug, Clone)]
pub struct TwinkleStar {
    /// Position as percentages of the viewport.
    pub x_pct: f32,
    pub y_pct: f32,
    /// Phase offset into the twinkle period.
    pub phase_ms: u64,
    pub glyph: char,
}

impl TwinkleStar {
    /// Brightness in [0, 1], oscillating on the twinkle period.
    pub fn brightness(&self, now_ms: u64) -> f32 {
        let t = ((now_ms + self.phase_ms) % TWINKLE_PERIOD_MS) as f32 / TWINKLE_PERIOD_MS as f32;
        (t * std::f32::consts::TAU).sin() * 0.5 + 0.5
    }
}

/// Spawn a field of `count` stars at random positions.
pub fn spawn_field(rng: &mut Rng, count: usize) -> Vec<TwinkleStar> {
    (0..count)
        .map(|_| TwinkleStar {
            x_pct: rng.range_f32(0.0, 100.0),
            y_pct: rng.range_f32(0.0, 100.0),
            phase_ms: rng.below(TWINKLE_PERIOD_MS),
            glyph: *rng.pick(TWINKLE_GLYPHS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_size_and_positions() {
        let mut rng = Rng::with_seed(12);
        let field = spawn_field(&mut rng, 50);
        assert_eq!(field.len(), 50);
        for star in &field {
            assert!((0.0..100.0).contains(&star.x_pct));
            assert!((0.0..100.0).contains(&star.y_pct));
        }
    }

    #[test]
    fn test_brightness_bounds() {
        let mut rng = Rng::with_seed(13);
        let field = spawn_field(&mut rng, 10);
        for now in (0..10_000).step_by(100) {
            for star in &field {
                let b = star.brightness(now);
                assert!((0.0..=1.0).contains(&b));
            }
        }
    }
}
