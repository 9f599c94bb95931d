//! Periodic firework bursts for the celebration scene.

use crate::glyphs::{FIREWORK_PALETTE, SPARK_GLYPHS};
use crate::particle::Particle;
use crate::rng::Rng;

/// Interval between fireworks.
pub const SPAWN_INTERVAL_MS: u64 = 600;

/// Sparks per firework.
pub const SPARKS_PER_FIREWORK: usize = 8;

/// Downward acceleration applied to each spark per frame-step.
pub const GRAVITY: f32 = 0.1;

/// Fraction of the viewport height fireworks spawn within (the upper
/// part, so sparks have room to fall).
pub const SPAWN_BAND: f32 = 0.6;

/// Periodic firework spawner.
#[derive(Debug, Default)]
pub struct FireworkSpawner {
    /// Interval phase anchor; unset until the first update after a
    /// reset.
    last_spawn_ms: Option<u64>,
}

impl FireworkSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn fireworks for every interval elapsed since the last call,
    /// appending sparks to `out`. Spawn points are random within the
    /// upper band of the viewport; each firework uses one palette
    /// color for all of its sparks.
    pub fn update(
        &mut self,
        now_ms: u64,
        width_px: f32,
        height_px: f32,
        rng: &mut Rng,
        out: &mut Vec<Particle>,
    ) {
        let Some(last) = self.last_spawn_ms else {
            self.last_spawn_ms = Some(now_ms);
            return;
        };
        let mut last = last;
        while now_ms.saturating_sub(last) >= SPAWN_INTERVAL_MS {
            last += SPAWN_INTERVAL_MS;
            spawn_one(rng, width_px, height_px, out);
        }
        self.last_spawn_ms = Some(last);
    }

    /// Reset the interval phase (used when the effect is re-enabled).
    pub fn reset(&mut self) {
        self.last_spawn_ms = None;
    }
}

/// Emit one firework's sparks.
fn spawn_one(rng: &mut Rng, width_px: f32, height_px: f32, out: &mut Vec<Particle>) {
    let x = rng.range_f32(0.0, width_px);
    let y = rng.range_f32(0.0, height_px * SPAWN_BAND);
    let color = *rng.pick(&FIREWORK_PALETTE);

    for i in 0..SPARKS_PER_FIREWORK {
        let angle = i as f32 / SPARKS_PER_FIREWORK as f32 * std::f32::consts::TAU;
        let speed = rng.range_f32(5.0, 10.0);
        let glyph = SPARK_GLYPHS[i % SPARK_GLYPHS.len()];
        out.push(Particle::new(
            x,
            y,
            angle.cos() * speed,
            angle.sin() * speed,
            GRAVITY,
            glyph,
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_on_interval() {
        let mut spawner = FireworkSpawner::new();
        let mut rng = Rng::with_seed(5);
        let mut out = Vec::new();

        // First call only anchors the phase.
        spawner.update(100, 800.0, 400.0, &mut rng, &mut out);
        assert!(out.is_empty());

        spawner.update(100 + SPAWN_INTERVAL_MS - 1, 800.0, 400.0, &mut rng, &mut out);
        assert!(out.is_empty());

        spawner.update(100 + SPAWN_INTERVAL_MS, 800.0, 400.0, &mut rng, &mut out);
        assert_eq!(out.len(), SPARKS_PER_FIREWORK);
    }

    #[test]
    fn test_catches_up_missed_intervals() {
        let mut spawner = FireworkSpawner::new();
        let mut rng = Rng::with_seed(6);
        let mut out = Vec::new();

        spawner.update(0, 800.0, 400.0, &mut rng, &mut out);
        spawner.update(SPAWN_INTERVAL_MS * 3, 800.0, 400.0, &mut rng, &mut out);
        assert_eq!(out.len(), SPARKS_PER_FIREWORK * 3);
    }

    #[test]
    fn test_spawn_band_and_gravity() {
        let mut rng = Rng::with_seed(7);
        let mut out = Vec::new();
        for _ in 0..50 {
            spawn_one(&mut rng, 800.0, 400.0, &mut out);
        }
        for p in &out {
            assert!(p.y <= 400.0 * SPAWN_BAND);
            assert!((0.0..=800.0).contains(&p.x));
            assert_eq!(p.ay, GRAVITY);
        }
    }

    #[test]
    fn test_sparks_share_firework_color() {
        let mut rng = Rng::with_seed(8);
        let mut out = Vec::new();
        spawn_one(&mut rng, 800.0, 400.0, &mut out);
        let first = out[0].color;
        assert!(out.iter().all(|p| p.color == first));
    }
}
