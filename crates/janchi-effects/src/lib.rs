//! Decorative particle effects for the janchi experience.
//!
//! Four effect kinds share this crate: tap-feedback bursts and periodic
//! fireworks are stepped per frame with real velocity integration,
//! while ambient floaters and the closing star field are driven purely
//! by a fixed-duration rise animation. A single [`EffectsState`] owns
//! every live entity and is updated and drawn from the render pass.

mod burst;
mod firework;
mod floaters;
mod glyphs;
mod particle;
mod rng;
mod state;
mod twinkle;

pub use floaters::{Floater, FloaterBatch, FloaterMode};
pub use particle::{FADE_DISTANCE_PX, PX_PER_CELL_X, PX_PER_CELL_Y, Particle};
pub use rng::Rng;
pub use state::EffectsState;
