//! Core scene sequencing logic for the janchi experience.
//!
//! This crate holds the scripted state machine: the fixed scene order,
//! the cursor and active-set rules, and the timer scheduler that drives
//! delayed auto-advances. It is presentation-free and driven entirely
//! by caller-supplied millisecond timestamps, so everything here is
//! unit-testable without a terminal or a clock.

mod scene;
mod sequencer;
mod timer;

pub use scene::{SceneId, ViewportTier, WIDE_VIEWPORT_PX};
pub use sequencer::{
    FINALE_HOLD_MS, QUESTION_REVEAL_DELAY_MS, REPLAY_DELAY_MS, RETRY_MESSAGE_MS, SceneEvent,
    Sequencer, TAP_ADVANCE_DELAY_MS, YES_ADVANCE_DELAY_MS,
};
pub use timer::{Scheduler, Timer, TimerAction};
