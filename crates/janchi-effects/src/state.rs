//! The frame driver owning every live effect.
//!
//! One `EffectsState` holds all stepped particles in a single
//! collection and steps them once per rendered frame, removing expired
//! ones in place; floaters and the twinkle field are duration-driven
//! and just recycled. The state updates and draws from the render pass
//! and re-seeds its batches when the viewport dimensions change.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use janchi_core::{SceneId, ViewportTier};

use crate::burst;
use crate::firework::FireworkSpawner;
use crate::floaters::{BatchSpec, FloaterBatch, FloaterMode};
use crate::glyphs::{
    self, FINAL_HEART_GLYPHS, HEART_GLYPHS, HEART_PINK, HEART_ROSE, LETTER_HEART_GLYPHS,
    STAR_GLYPHS, STAR_GOLD,
};
use crate::particle::{PX_PER_CELL_X, PX_PER_CELL_Y, Particle};
use crate::rng::Rng;
use crate::twinkle::{self, TwinkleStar};

/// Nominal milliseconds per frame-step (the physics constants are in
/// px per frame at display refresh cadence).
const FRAME_STEP_MS: f32 = 16.0;

/// Batch counts, (wide, narrow).
const INTRO_STAR_COUNT: (usize, usize) = (50, 30);
const CELEBRATION_HEART_COUNT: (usize, usize) = (15, 10);
const LETTER_HEART_COUNT: (usize, usize) = (8, 5);
const FINAL_HEART_COUNT: (usize, usize) = (12, 8);
const FINAL_STAR_COUNT: (usize, usize) = (15, 10);

const CELEBRATION_SPEC: BatchSpec = BatchSpec {
    glyphs: HEART_GLYPHS,
    color: HEART_PINK,
    max_delay_ms: 6_000,
    base_duration_ms: 6_000,
    extra_duration_ms: 2_000,
};

const LETTER_SPEC: BatchSpec = BatchSpec {
    glyphs: LETTER_HEART_GLYPHS,
    color: HEART_ROSE,
    max_delay_ms: 6_000,
    base_duration_ms: 6_000,
    extra_duration_ms: 1,
};

const FINAL_HEART_SPEC: BatchSpec = BatchSpec {
    glyphs: FINAL_HEART_GLYPHS,
    color: HEART_PINK,
    max_delay_ms: 8_000,
    base_duration_ms: 8_000,
    extra_duration_ms: 2_000,
};

const FINAL_STAR_SPEC: BatchSpec = BatchSpec {
    glyphs: STAR_GLYPHS,
    color: STAR_GOLD,
    max_delay_ms: 8_000,
    base_duration_ms: 8_000,
    extra_duration_ms: 2_000,
};

/// All live decorative effects.
#[derive(Debug)]
pub struct EffectsState {
    rng: Rng,
    /// Every stepped particle (bursts and firework sparks).
    particles: Vec<Particle>,
    fireworks: FireworkSpawner,
    fireworks_active: bool,
    intro_stars: Vec<TwinkleStar>,
    celebration_hearts: FloaterBatch,
    letter_hearts: FloaterBatch,
    final_hearts: FloaterBatch,
    final_stars: FloaterBatch,
    last_width: u16,
    last_height: u16,
    last_update_ms: u64,
}

impl EffectsState {
    /// Create the effect state; `seed` pins the randomness for
    /// reproducible runs and tests.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map(Rng::with_seed).unwrap_or_default(),
            particles: Vec::new(),
            fireworks: FireworkSpawner::new(),
            fireworks_active: false,
            intro_stars: Vec::new(),
            celebration_hearts: FloaterBatch::empty(FloaterMode::Replicate, CELEBRATION_SPEC),
            letter_hearts: FloaterBatch::empty(FloaterMode::Loop, LETTER_SPEC),
            final_hearts: FloaterBatch::empty(FloaterMode::Loop, FINAL_HEART_SPEC),
            final_stars: FloaterBatch::empty(FloaterMode::Loop, FINAL_STAR_SPEC),
            last_width: 0,
            last_height: 0,
            last_update_ms: 0,
        }
    }

    /// Viewport width in logical pixels.
    fn width_px(&self) -> f32 {
        self.last_width as f32 * PX_PER_CELL_X
    }

    /// Viewport height in logical pixels.
    fn height_px(&self) -> f32 {
        self.last_height as f32 * PX_PER_CELL_Y
    }

    /// (Re)spawn batches when the viewport dimensions change. Counts
    /// follow the width tier: narrow viewports get fewer floaters.
    pub fn sync_viewport(&mut self, width: u16, height: u16, now_ms: u64) {
        if width == self.last_width && height == self.last_height {
            return;
        }
        self.last_width = width;
        self.last_height = height;

        let tier = ViewportTier::from_width_px((width as f32 * PX_PER_CELL_X) as u32);
        self.intro_stars =
            twinkle::spawn_field(&mut self.rng, tier.pick(INTRO_STAR_COUNT.0, INTRO_STAR_COUNT.1));
        self.celebration_hearts.respawn(
            &mut self.rng,
            now_ms,
            tier.pick(CELEBRATION_HEART_COUNT.0, CELEBRATION_HEART_COUNT.1),
        );
        self.letter_hearts.respawn(
            &mut self.rng,
            now_ms,
            tier.pick(LETTER_HEART_COUNT.0, LETTER_HEART_COUNT.1),
        );
        self.final_hearts.respawn(
            &mut self.rng,
            now_ms,
            tier.pick(FINAL_HEART_COUNT.0, FINAL_HEART_COUNT.1),
        );
        self.final_stars.respawn(
            &mut self.rng,
            now_ms,
            tier.pick(FINAL_STAR_COUNT.0, FINAL_STAR_COUNT.1),
        );
    }

    /// Step all live effects to `now_ms`: particle integration with
    /// in-place removal, periodic firework spawning, floater recycling.
    pub fn advance(&mut self, now_ms: u64) {
        let delta_ms = now_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = now_ms;

        let dt = delta_ms as f32 / FRAME_STEP_MS;
        for particle in &mut self.particles {
            particle.step(dt);
        }
        // Decay removal plus off-screen culling: a burst particle with a
        // purely horizontal trajectory never accrues vertical travel, so
        // it is dropped once it leaves the viewport instead.
        let (w_px, h_px) = (self.width_px(), self.height_px());
        let margin = PX_PER_CELL_Y;
        self.particles.retain(|p| {
            !p.expired()
                && p.x >= -margin
                && p.x <= w_px + margin
                && p.y >= -margin
                && p.y <= h_px + margin
        });

        if self.fireworks_active {
            let (w, h) = (self.width_px(), self.height_px());
            self.fireworks
                .update(now_ms, w, h, &mut self.rng, &mut self.particles);
        }

        self.celebration_hearts.update(now_ms, &mut self.rng);
        self.letter_hearts.update(now_ms, &mut self.rng);
        self.final_hearts.update(now_ms, &mut self.rng);
        self.final_stars.update(now_ms, &mut self.rng);
    }

    /// Spawn a heart burst at the center of the viewport.
    pub fn burst_at_center(&mut self, color: Color) {
        let (x, y) = (self.width_px() / 2.0, self.height_px() / 2.0);
        self.particles.extend(burst::spawn(&mut self.rng, x, y, color));
    }

    /// Enable or disable the periodic fireworks.
    pub fn set_fireworks(&mut self, active: bool) {
        if active && !self.fireworks_active {
            self.fireworks.reset();
        }
        self.fireworks_active = active;
    }

    /// Live stepped particle count.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Floater counts per batch, in scene order (used by tests and the
    /// debug footer).
    pub fn batch_counts(&self) -> [usize; 4] {
        [
            self.celebration_hearts.len(),
            self.letter_hearts.len(),
            self.final_hearts.len(),
            self.final_stars.len(),
        ]
    }

    /// Intro star count.
    pub fn intro_star_count(&self) -> usize {
        self.intro_stars.len()
    }

    /// Update and draw the decorative layer for the active scene.
    /// Rendered beneath the scene's own widgets.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, scene: SceneId, now_ms: u64) {
        self.sync_viewport(area.width, area.height, now_ms);
        self.advance(now_ms);

        let width = area.width as usize;
        let height = area.height as usize;
        if width == 0 || height == 0 {
            return;
        }

        let mut grid: Vec<Vec<Option<(char, Color)>>> = vec![vec![None; width]; height];

        match scene {
            SceneId::Balloon => self.place_twinkle(&mut grid, now_ms),
            SceneId::Birthday => self.place_batch_idx(&mut grid, now_ms, 0),
            SceneId::Letter => self.place_batch_idx(&mut grid, now_ms, 1),
            SceneId::Final => {
                self.place_batch_idx(&mut grid, now_ms, 2);
                self.place_batch_idx(&mut grid, now_ms, 3);
            }
            _ => {}
        }
        self.place_particles(&mut grid);

        let lines: Vec<Line> = grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn place_twinkle(&self, grid: &mut [Vec<Option<(char, Color)>>], now_ms: u64) {
        let (width, height) = (grid[0].len(), grid.len());
        for star in &self.intro_stars {
            let col = (star.x_pct / 100.0 * width as f32) as usize;
            let row = (star.y_pct / 100.0 * height as f32) as usize;
            if col >= width || row >= height {
                continue;
            }
            let brightness = star.brightness(now_ms);
            // Dimmest stars wink out entirely.
            if brightness < 0.2 {
                continue;
            }
            let base = Color::Rgb(150, 150, 200);
            grid[row][col] = Some((star.glyph, glyphs::dim(base, 0.4 + brightness * 0.6)));
        }
    }

    fn place_batch_idx(&self, grid: &mut [Vec<Option<(char, Color)>>], now_ms: u64, idx: usize) {
        let batch = match idx {
            0 => &self.celebration_hearts,
            1 => &self.letter_hearts,
            2 => &self.final_hearts,
            _ => &self.final_stars,
        };
        let (width, height) = (grid[0].len(), grid.len());
        for floater in batch.iter() {
            let Some(progress) = floater.progress(now_ms) else {
                continue;
            };
            // Rise from just below the bottom edge to above the top.
            let travel = height as f32 + 2.0;
            let row_f = height as f32 - progress * travel;
            if row_f < 0.0 || row_f >= height as f32 {
                continue;
            }
            let col = (floater.x_pct / 100.0 * width as f32) as usize;
            if col >= width {
                continue;
            }
            let opacity = 1.0 - progress * 0.6;
            grid[row_f as usize][col] = Some((floater.glyph, glyphs::dim(floater.color, opacity)));
        }
    }

    fn place_particles(&self, grid: &mut [Vec<Option<(char, Color)>>]) {
        let (width, height) = (grid[0].len(), grid.len());
        for particle in &self.particles {
            let col = particle.x / PX_PER_CELL_X;
            let row = particle.y / PX_PER_CELL_Y;
            if col < 0.0 || row < 0.0 {
                continue;
            }
            let (col, row) = (col as usize, row as usize);
            if col >= width || row >= height {
                continue;
            }
            let color = glyphs::dim(particle.color, particle.opacity());
            grid[row][col] = Some((particle.glyph, color));
        }
    }
}

impl Default for EffectsState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(width: u16) -> EffectsState {
        let mut state = EffectsState::new(Some(99));
        state.sync_viewport(width, 40, 0);
        state
    }

    /// Wide terminals (> 96 cells at 8 px/cell) use the denser counts.
    #[test]
    fn test_batch_counts_monotonic_in_width() {
        let narrow = state(80);
        let wide = state(120);
        assert!(narrow.intro_star_count() <= wide.intro_star_count());
        for (n, w) in narrow.batch_counts().iter().zip(wide.batch_counts()) {
            assert!(*n <= w);
        }
        assert_eq!(narrow.batch_counts(), [10, 5, 8, 10]);
        assert_eq!(wide.batch_counts(), [15, 8, 12, 15]);
    }

    /// Every burst particle is eventually removed by the frame driver.
    #[test]
    fn test_burst_particles_drain() {
        let mut state = state(100);
        state.burst_at_center(Color::Rgb(255, 107, 157));
        assert_eq!(state.particle_count(), crate::burst::BURST_COUNT);

        let mut now = 0;
        while state.particle_count() > 0 {
            now += 33;
            state.advance(now);
            assert!(now < 120_000, "burst never drained");
        }
    }

    /// Fireworks keep spawning while active and stop when disabled.
    #[test]
    fn test_fireworks_follow_active_flag() {
        let mut state = state(100);
        state.set_fireworks(true);
        state.advance(100);
        state.advance(100 + crate::firework::SPAWN_INTERVAL_MS);
        assert!(state.particle_count() > 0);

        state.set_fireworks(false);
        // Let everything decay with no new spawns.
        let mut now = 100 + crate::firework::SPAWN_INTERVAL_MS;
        for _ in 0..4000 {
            now += 33;
            state.advance(now);
        }
        assert_eq!(state.particle_count(), 0);
    }
}
