//! The scripted scene state machine.
//!
//! One sequencer instance drives the whole experience. It owns the
//! cursor into the fixed scene order, the active-set (exactly one scene
//! is active at any time), and the timer scheduler for delayed
//! auto-advances. Time never comes from a clock here; the caller feeds
//! monotonic milliseconds into [`Sequencer::tick`], which is also what
//! the tests do.

use crate::scene::SceneId;
use crate::timer::{Scheduler, Timer, TimerAction};

/// Delay between a tap (balloon or heart) and the scene advance.
pub const TAP_ADVANCE_DELAY_MS: u64 = 600;
/// Delay between answering "yes" and the scene advance.
pub const YES_ADVANCE_DELAY_MS: u64 = 500;
/// Delay before the birthday question card is revealed.
pub const QUESTION_REVEAL_DELAY_MS: u64 = 10_000;
/// How long the retry message stays up before restarting at scene 0.
pub const RETRY_MESSAGE_MS: u64 = 3_000;
/// How long the closing scene holds before the experience ends.
pub const FINALE_HOLD_MS: u64 = 6_000;
/// Delay between completion and the replay loop back to scene 0.
pub const REPLAY_DELAY_MS: u64 = 3_000;

/// Observable events for the presentation layer, drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// A scene became the active one.
    Entered(SceneId),
    /// The intro balloon was popped; a burst effect should play.
    BalloonPopped,
    /// The heart was tapped; a pulse/burst reaction should play.
    HeartPulsed,
    /// The full sequence finished; a replay is pending.
    Completed,
}

/// The scene sequencer.
#[derive(Debug)]
pub struct Sequencer {
    /// Cursor into the scene order, always within [0, COUNT-1].
    cursor: usize,
    /// Active-set; `show` re-asserts exactly one entry.
    active: [bool; SceneId::COUNT],
    scheduler: Scheduler,
    now_ms: u64,
    /// The balloon control is disabled once popped, re-armed on replay.
    balloon_popped: bool,
    question_visible: bool,
    retry_visible: bool,
    /// Completed full cycles.
    completions: u32,
    events: Vec<SceneEvent>,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    /// Construct the sequencer, run every scene's setup once, and show
    /// the first scene.
    pub fn new() -> Self {
        let mut seq = Self {
            cursor: 0,
            active: [false; SceneId::COUNT],
            scheduler: Scheduler::new(),
            now_ms: 0,
            balloon_popped: false,
            question_visible: false,
            retry_visible: false,
            completions: 0,
            events: Vec::new(),
        };
        seq.setup();
        seq.show(0);
        seq
    }

    /// One-time setup for all scenes, regardless of activation order.
    /// The birthday question reveal counts from here, not from the
    /// scene's activation.
    fn setup(&mut self) {
        self.schedule(
            QUESTION_REVEAL_DELAY_MS,
            SceneId::Birthday,
            Some(SceneId::Birthday),
            TimerAction::RevealQuestion,
        );
    }

    fn schedule(&mut self, delay_ms: u64, owner: SceneId, guard: Option<SceneId>, action: TimerAction) {
        self.scheduler.schedule(Timer {
            fire_at_ms: self.now_ms + delay_ms,
            owner,
            guard,
            action,
        });
    }

    /// Deactivate every scene and activate the one at `index`.
    /// Out-of-range indices are ignored. Timers owned by the scene
    /// being left are cancelled, so a stale delay can never fire into
    /// a scene the user has already abandoned.
    pub fn show(&mut self, index: usize) {
        let Some(target) = SceneId::from_index(index) else {
            return;
        };
        let previous = self.current();
        if previous != target {
            self.scheduler.cancel_owned_by(previous);
        }
        for slot in &mut self.active {
            *slot = false;
        }
        self.active[index] = true;
        self.cursor = index;
        self.events.push(SceneEvent::Entered(target));
        self.on_enter(target);
    }

    /// Per-activation behavior. Distinct from `setup`, which runs once.
    fn on_enter(&mut self, scene: SceneId) {
        match scene {
            SceneId::Balloon => {
                // Re-arm the tap control so the replay loop is playable.
                self.balloon_popped = false;
            }
            SceneId::Birthday => {
                self.retry_visible = false;
                // First run keeps the setup-time reveal; a re-entry with
                // no reveal pending (replay, or the setup timer already
                // spent) schedules a fresh one.
                if !self.question_visible
                    && !self.scheduler.has_action(TimerAction::RevealQuestion)
                {
                    self.schedule(
                        QUESTION_REVEAL_DELAY_MS,
                        SceneId::Birthday,
                        Some(SceneId::Birthday),
                        TimerAction::RevealQuestion,
                    );
                }
            }
            SceneId::Final => {
                self.schedule(
                    FINALE_HOLD_MS,
                    SceneId::Final,
                    Some(SceneId::Final),
                    TimerAction::EndExperience,
                );
            }
            _ => {}
        }
    }

    /// Move forward one scene, or end the experience on the last one.
    pub fn advance(&mut self) {
        if self.cursor < SceneId::COUNT - 1 {
            self.show(self.cursor + 1);
        } else {
            self.end();
        }
    }

    /// Move back one scene; a no-op on the first.
    pub fn retreat(&mut self) {
        if self.cursor > 0 {
            self.show(self.cursor - 1);
        }
    }

    /// Announce completion and schedule the replay loop back to the
    /// first scene.
    pub fn end(&mut self) {
        self.completions += 1;
        self.events.push(SceneEvent::Completed);
        self.schedule(REPLAY_DELAY_MS, SceneId::Final, None, TimerAction::Replay);
    }

    /// Advance the sequencer clock and fire due timers. Guarded timers
    /// are consumed but skipped when the cursor has moved on.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        for timer in self.scheduler.fire_due(self.now_ms) {
            if let Some(guard) = timer.guard
                && guard.index() != self.cursor
            {
                continue;
            }
            self.apply(timer.action);
        }
    }

    fn apply(&mut self, action: TimerAction) {
        match action {
            TimerAction::Advance => self.advance(),
            TimerAction::RevealQuestion => self.question_visible = true,
            TimerAction::HideRetryAndRestart => {
                self.retry_visible = false;
                self.show(0);
            }
            TimerAction::EndExperience => self.end(),
            TimerAction::Replay => self.show(0),
        }
    }

    /// Tap on the intro balloon. Pops it once, then advances after the
    /// burst has had its moment.
    pub fn tap_balloon(&mut self) {
        if self.current() != SceneId::Balloon || self.balloon_popped {
            return;
        }
        self.balloon_popped = true;
        self.events.push(SceneEvent::BalloonPopped);
        self.schedule(
            TAP_ADVANCE_DELAY_MS,
            SceneId::Balloon,
            None,
            TimerAction::Advance,
        );
    }

    /// Answer "yes" to the birthday question.
    pub fn answer_yes(&mut self) {
        if self.current() != SceneId::Birthday || !self.question_visible {
            return;
        }
        self.question_visible = false;
        self.schedule(
            YES_ADVANCE_DELAY_MS,
            SceneId::Birthday,
            None,
            TimerAction::Advance,
        );
    }

    /// Answer "no": show the retry message, then return to the very
    /// first scene (an explicit `show(0)`, not a retreat).
    pub fn answer_no(&mut self) {
        if self.current() != SceneId::Birthday || !self.question_visible {
            return;
        }
        self.question_visible = false;
        self.retry_visible = true;
        self.schedule(
            RETRY_MESSAGE_MS,
            SceneId::Birthday,
            None,
            TimerAction::HideRetryAndRestart,
        );
    }

    /// Tap on the central heart.
    pub fn tap_heart(&mut self) {
        if self.current() != SceneId::Heart {
            return;
        }
        self.events.push(SceneEvent::HeartPulsed);
        self.schedule(
            TAP_ADVANCE_DELAY_MS,
            SceneId::Heart,
            None,
            TimerAction::Advance,
        );
    }

    /// The "next" control on the gallery and letter scenes.
    pub fn next(&mut self) {
        if matches!(self.current(), SceneId::Memories | SceneId::Letter) {
            self.advance();
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The currently active scene.
    pub fn current(&self) -> SceneId {
        SceneId::ALL[self.cursor]
    }

    /// Whether the given scene is the active one.
    pub fn is_active(&self, scene: SceneId) -> bool {
        self.active[scene.index()]
    }

    /// How many scenes are currently active (invariantly one).
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    /// Whether the balloon control has been disabled by a pop.
    pub fn balloon_popped(&self) -> bool {
        self.balloon_popped
    }

    /// Whether the birthday question card is showing.
    pub fn question_visible(&self) -> bool {
        self.question_visible
    }

    /// Whether the retry message is showing.
    pub fn retry_visible(&self) -> bool {
        self.retry_visible
    }

    /// Completed full cycles so far.
    pub fn completions(&self) -> u32 {
        self.completions
    }

    /// Pending timer count (for diagnostics and tests).
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario A: fresh sequencer shows scene 0.
    #[test]
    fn test_initial_state() {
        let seq = Sequencer::new();
        assert_eq!(seq.cursor(), 0);
        assert!(seq.is_active(SceneId::Balloon));
        assert_eq!(seq.active_count(), 1);
    }

    /// Scenario B: balloon tap bursts, then advances 600 ms later.
    #[test]
    fn test_balloon_tap_advances_after_delay() {
        let mut seq = Sequencer::new();
        seq.tick(100);
        seq.tap_balloon();
        assert!(seq.balloon_popped());
        assert!(seq.drain_events().contains(&SceneEvent::BalloonPopped));

        // Second tap on a disabled control is ignored.
        seq.tap_balloon();
        assert!(!seq.drain_events().contains(&SceneEvent::BalloonPopped));

        seq.tick(100 + TAP_ADVANCE_DELAY_MS - 1);
        assert_eq!(seq.cursor(), 0);
        seq.tick(100 + TAP_ADVANCE_DELAY_MS);
        assert_eq!(seq.cursor(), 1);
        assert!(seq.is_active(SceneId::Birthday));
        assert_eq!(seq.active_count(), 1);
    }

    /// Scenario C: question reveal 10 s from setup, "no" restarts.
    #[test]
    fn test_question_reveal_and_no_branch() {
        let mut seq = Sequencer::new();
        seq.tick(100);
        seq.tap_balloon();
        seq.tick(700);
        assert_eq!(seq.cursor(), 1);
        assert!(!seq.question_visible());

        seq.tick(QUESTION_REVEAL_DELAY_MS);
        assert!(seq.question_visible());

        seq.answer_no();
        assert!(!seq.question_visible());
        assert!(seq.retry_visible());

        seq.tick(QUESTION_REVEAL_DELAY_MS + RETRY_MESSAGE_MS);
        assert!(!seq.retry_visible());
        assert_eq!(seq.cursor(), 0);
        assert!(seq.is_active(SceneId::Balloon));
        // The balloon is armed again for the second try.
        assert!(!seq.balloon_popped());
    }

    #[test]
    fn test_question_yes_advances() {
        let mut seq = Sequencer::new();
        seq.tap_balloon();
        seq.tick(TAP_ADVANCE_DELAY_MS);
        seq.tick(QUESTION_REVEAL_DELAY_MS);
        assert!(seq.question_visible());

        seq.answer_yes();
        assert!(!seq.question_visible());
        seq.tick(QUESTION_REVEAL_DELAY_MS + YES_ADVANCE_DELAY_MS);
        assert_eq!(seq.cursor(), 2);
    }

    /// The reveal timer is guarded: if the user has already navigated
    /// away when it fires, nothing becomes visible.
    #[test]
    fn test_question_guard_when_navigated_away() {
        let mut seq = Sequencer::new();
        // Still on scene 0 when the setup timer fires.
        seq.tick(QUESTION_REVEAL_DELAY_MS);
        assert!(!seq.question_visible());
    }

    /// Scenario D: the closing scene holds 6 s, then the whole
    /// experience restarts 3 s after completion.
    #[test]
    fn test_finale_ends_and_replays() {
        let mut seq = Sequencer::new();
        for _ in 0..5 {
            seq.advance();
        }
        assert_eq!(seq.cursor(), 5);
        seq.drain_events();

        seq.tick(FINALE_HOLD_MS - 1);
        assert_eq!(seq.completions(), 0);
        seq.tick(FINALE_HOLD_MS);
        assert_eq!(seq.completions(), 1);
        assert!(seq.drain_events().contains(&SceneEvent::Completed));
        assert_eq!(seq.cursor(), 5);

        seq.tick(FINALE_HOLD_MS + REPLAY_DELAY_MS);
        assert_eq!(seq.cursor(), 0);
        assert!(seq.is_active(SceneId::Balloon));
    }

    /// Scenario E: N-1 advances walk to the last scene without ever
    /// leaving bounds; one more invokes end() instead of overflowing.
    #[test]
    fn test_advance_stays_in_bounds() {
        let mut seq = Sequencer::new();
        for expected in 1..SceneId::COUNT {
            seq.advance();
            assert_eq!(seq.cursor(), expected);
            assert_eq!(seq.active_count(), 1);
        }
        assert_eq!(seq.cursor(), SceneId::COUNT - 1);

        seq.advance();
        assert_eq!(seq.cursor(), SceneId::COUNT - 1);
        assert_eq!(seq.completions(), 1);
    }

    #[test]
    fn test_retreat_stops_at_zero() {
        let mut seq = Sequencer::new();
        seq.retreat();
        assert_eq!(seq.cursor(), 0);
        seq.advance();
        seq.retreat();
        assert_eq!(seq.cursor(), 0);
    }

    /// show(k) twice leaves the same observable state as once.
    #[test]
    fn test_show_idempotent() {
        let mut seq = Sequencer::new();
        seq.show(2);
        let cursor = seq.cursor();
        let active: Vec<bool> = SceneId::ALL.iter().map(|s| seq.is_active(*s)).collect();
        seq.show(2);
        assert_eq!(seq.cursor(), cursor);
        let active_again: Vec<bool> = SceneId::ALL.iter().map(|s| seq.is_active(*s)).collect();
        assert_eq!(active, active_again);
        assert_eq!(seq.active_count(), 1);
    }

    #[test]
    fn test_show_out_of_range_ignored() {
        let mut seq = Sequencer::new();
        seq.show(SceneId::COUNT);
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.active_count(), 1);
    }

    /// Leaving a scene cancels the timers it owns.
    #[test]
    fn test_deactivation_cancels_owned_timers() {
        let mut seq = Sequencer::new();
        seq.tap_balloon();
        let pending = seq.pending_timers();
        // Jump away before the tap's advance fires.
        seq.show(3);
        assert!(seq.pending_timers() < pending);
        seq.tick(TAP_ADVANCE_DELAY_MS);
        // The stale advance must not have moved the cursor.
        assert_eq!(seq.cursor(), 3);
    }

    /// Re-entering the birthday scene after the setup reveal was spent
    /// arms a fresh reveal, so the replay loop stays playable.
    #[test]
    fn test_question_rearms_on_reentry() {
        let mut seq = Sequencer::new();
        // Setup reveal fires while still on scene 0 and is consumed.
        seq.tick(QUESTION_REVEAL_DELAY_MS);
        assert!(!seq.question_visible());

        seq.tick(QUESTION_REVEAL_DELAY_MS + 1_000);
        seq.tap_balloon();
        seq.tick(QUESTION_REVEAL_DELAY_MS + 1_000 + TAP_ADVANCE_DELAY_MS);
        assert_eq!(seq.cursor(), 1);

        seq.tick(2 * QUESTION_REVEAL_DELAY_MS + 1_000 + TAP_ADVANCE_DELAY_MS);
        assert!(seq.question_visible());
    }

    #[test]
    fn test_heart_tap_advances() {
        let mut seq = Sequencer::new();
        seq.show(3);
        seq.drain_events();
        seq.tap_heart();
        assert!(seq.drain_events().contains(&SceneEvent::HeartPulsed));
        seq.tick(TAP_ADVANCE_DELAY_MS);
        assert_eq!(seq.cursor(), 4);
    }

    #[test]
    fn test_next_only_on_gallery_and_letter() {
        let mut seq = Sequencer::new();
        seq.next();
        assert_eq!(seq.cursor(), 0);
        seq.show(2);
        seq.next();
        assert_eq!(seq.cursor(), 3);
        seq.show(4);
        seq.next();
        assert_eq!(seq.cursor(), 5);
    }

    #[test]
    fn test_entered_events_emitted() {
        let mut seq = Sequencer::new();
        assert!(
            seq.drain_events()
                .contains(&SceneEvent::Entered(SceneId::Balloon))
        );
        seq.advance();
        assert!(
            seq.drain_events()
                .contains(&SceneEvent::Entered(SceneId::Birthday))
        );
    }
}
