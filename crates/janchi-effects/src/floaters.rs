//! Ambient floating glyphs: hearts and stars that rise from below the
//! viewport on a fixed-duration animation.
//!
//! No per-frame physics here; a floater's lifetime is its animation
//! cycle. The celebration batch sustains a steady population by
//! re-randomizing expired slots in place (a bounded pool, never a
//! growing clone chain); looping batches restart the same cycle.

use ratatui::style::Color;

use crate::rng::Rng;

/// How a batch sustains its population after a cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloaterMode {
    /// Expired slots are re-randomized (glyph, position, duration).
    Replicate,
    /// Each slot restarts its own cycle unchanged.
    Loop,
}

/// One rising decorative glyph.
#[derive(Debug, Clone)]
pub struct Floater {
    /// Horizontal position as a percentage of the viewport width.
    pub x_pct: f32,
    /// Delay before the rise starts.
    pub delay_ms: u64,
    /// Duration of one rise cycle.
    pub duration_ms: u64,
    /// When this floater (or its current cycle) was born.
    pub born_ms: u64,
    pub glyph: char,
    pub color: Color,
}

impl Floater {
    /// Progress through the current cycle in [0, 1]; `None` while the
    /// start is still delayed.
    pub fn progress(&self, now_ms: u64) -> Option<f32> {
        let since_born = now_ms.saturating_sub(self.born_ms);
        if since_born < self.delay_ms {
            return None;
        }
        let t = (since_born - self.delay_ms) as f32 / self.duration_ms.max(1) as f32;
        Some(t.min(1.0))
    }

    /// Whether the current cycle has completed.
    pub fn cycle_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.born_ms) >= self.delay_ms + self.duration_ms
    }
}

/// Timing and glyph parameters for spawning a batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchSpec {
    /// Glyph choices; one is picked per floater.
    pub glyphs: &'static [char],
    pub color: Color,
    /// Upper bound of the randomized start delay.
    pub max_delay_ms: u64,
    /// Base rise duration.
    pub base_duration_ms: u64,
    /// Randomized extra duration on top of the base.
    pub extra_duration_ms: u64,
}

/// A fixed-size batch of floaters with a sustain mode.
#[derive(Debug)]
pub struct FloaterBatch {
    mode: FloaterMode,
    spec: BatchSpec,
    floaters: Vec<Floater>,
}

impl FloaterBatch {
    /// Spawn `count` floaters at randomized horizontal positions with
    /// randomized per-instance delay and duration.
    pub fn spawn(rng: &mut Rng, now_ms: u64, count: usize, mode: FloaterMode, spec: BatchSpec) -> Self {
        let floaters = (0..count).map(|_| new_floater(rng, now_ms, &spec)).collect();
        Self {
            mode,
            spec,
            floaters,
        }
    }

    /// An empty batch (scene not yet entered).
    pub fn empty(mode: FloaterMode, spec: BatchSpec) -> Self {
        Self {
            mode,
            spec,
            floaters: Vec::new(),
        }
    }

    /// Re-spawn with a new count (viewport tier change).
    pub fn respawn(&mut self, rng: &mut Rng, now_ms: u64, count: usize) {
        self.floaters = (0..count).map(|_| new_floater(rng, now_ms, &self.spec)).collect();
    }

    /// Sustain the population: recycle every slot whose cycle is done.
    /// The pool size never changes.
    pub fn update(&mut self, now_ms: u64, rng: &mut Rng) {
        let mode = self.mode;
        let spec = self.spec;
        for floater in &mut self.floaters {
            if !floater.cycle_done(now_ms) {
                continue;
            }
            match mode {
                FloaterMode::Replicate => *floater = new_floater_immediate(rng, now_ms, &spec),
                FloaterMode::Loop => {
                    // Restart the same cycle, skipping the initial delay.
                    floater.born_ms = now_ms;
                    floater.delay_ms = 0;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.floaters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floaters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Floater> {
        self.floaters.iter()
    }
}

fn new_floater(rng: &mut Rng, now_ms: u64, spec: &BatchSpec) -> Floater {
    Floater {
        x_pct: rng.range_f32(0.0, 100.0),
        delay_ms: rng.below(spec.max_delay_ms.max(1)),
        duration_ms: spec.base_duration_ms + rng.below(spec.extra_duration_ms.max(1)),
        born_ms: now_ms,
        glyph: *rng.pick(spec.glyphs),
        color: spec.color,
    }
}

/// A recycled replacement starts rising right away; the stagger only
/// matters for the initial batch.
fn new_floater_immediate(rng: &mut Rng, now_ms: u64, spec: &BatchSpec) -> Floater {
    let mut floater = new_floater(rng, now_ms, spec);
    floater.delay_ms = 0;
    floater
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::{HEART_GLYPHS, HEART_PINK};

    fn spec() -> BatchSpec {
        BatchSpec {
            glyphs: HEART_GLYPHS,
            color: HEART_PINK,
            max_delay_ms: 6_000,
            base_duration_ms: 6_000,
            extra_duration_ms: 2_000,
        }
    }

    #[test]
    fn test_progress_respects_delay() {
        let floater = Floater {
            x_pct: 50.0,
            delay_ms: 1_000,
            duration_ms: 4_000,
            born_ms: 0,
            glyph: '♥',
            color: HEART_PINK,
        };
        assert_eq!(floater.progress(500), None);
        assert_eq!(floater.progress(1_000), Some(0.0));
        assert_eq!(floater.progress(3_000), Some(0.5));
        assert_eq!(floater.progress(9_000), Some(1.0));
        assert!(floater.cycle_done(5_000));
        assert!(!floater.cycle_done(4_999));
    }

    /// The replication pool is bounded: recycling never grows it.
    #[test]
    fn test_replicate_pool_bounded() {
        let mut rng = Rng::with_seed(9);
        let mut batch = FloaterBatch::spawn(&mut rng, 0, 15, FloaterMode::Replicate, spec());
        assert_eq!(batch.len(), 15);
        for now in (0..120_000).step_by(500) {
            batch.update(now, &mut rng);
            assert_eq!(batch.len(), 15);
        }
    }

    /// After recycling, every floater is in a live cycle again.
    #[test]
    fn test_recycled_slots_alive() {
        let mut rng = Rng::with_seed(10);
        let mut batch = FloaterBatch::spawn(&mut rng, 0, 10, FloaterMode::Replicate, spec());
        batch.update(60_000, &mut rng);
        for floater in batch.iter() {
            assert!(!floater.cycle_done(60_000));
        }
    }

    #[test]
    fn test_loop_mode_restarts_cycle() {
        let mut rng = Rng::with_seed(11);
        let mut batch = FloaterBatch::spawn(&mut rng, 0, 5, FloaterMode::Loop, spec());
        let positions: Vec<f32> = batch.iter().map(|f| f.x_pct).collect();
        batch.update(60_000, &mut rng);
        // Looping floaters keep their position and glyph.
        let after: Vec<f32> = batch.iter().map(|f| f.x_pct).collect();
        assert_eq!(positions, after);
        for floater in batch.iter() {
            assert_eq!(floater.progress(60_000), Some(0.0));
        }
    }
}
