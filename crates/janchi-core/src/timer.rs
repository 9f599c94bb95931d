//! One-shot timer scheduling for scene transitions.
//!
//! Every timer belongs to a scene; when that scene is deactivated the
//! sequencer cancels its timers, so effects of an abandoned scene can
//! never touch the cursor. Timers may additionally carry a cursor
//! guard that is re-checked at fire time.

use crate::scene::SceneId;

/// Action applied by the sequencer when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Move forward one scene (or end the experience on the last one).
    Advance,
    /// Reveal the birthday question card.
    RevealQuestion,
    /// Hide the retry message and restart from the first scene.
    HideRetryAndRestart,
    /// The closing scene has run its course.
    EndExperience,
    /// Loop back to the first scene after completion.
    Replay,
}

/// A scheduled one-shot action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    /// Absolute time at which the timer fires.
    pub fire_at_ms: u64,
    /// Scene whose deactivation cancels this timer.
    pub owner: SceneId,
    /// If set, the action is skipped unless this scene is current.
    pub guard: Option<SceneId>,
    /// Action to apply on fire.
    pub action: TimerAction,
}

/// Pending one-shot timers, fired by explicit clock advancement.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a timer.
    pub fn schedule(&mut self, timer: Timer) {
        self.timers.push(timer);
    }

    /// Cancel every timer owned by the given scene, returning how many
    /// were dropped.
    pub fn cancel_owned_by(&mut self, scene: SceneId) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.owner != scene);
        before - self.timers.len()
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Whether any pending timer carries the given action.
    pub fn has_action(&self, action: TimerAction) -> bool {
        self.timers.iter().any(|t| t.action == action)
    }

    /// Remove and return every timer due at `now_ms`, in scheduling
    /// order. Guards are not evaluated here; a drained timer is
    /// consumed whether or not its guard later passes.
    pub fn fire_due(&mut self, now_ms: u64) -> Vec<Timer> {
        let mut due = Vec::new();
        self.timers.retain(|t| {
            if t.fire_at_ms <= now_ms {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due
    }
}
