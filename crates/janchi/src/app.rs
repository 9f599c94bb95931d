//! The application event loop.
//!
//! One `App` instance owns the sequencer, the effect state and the
//! music toggle. The loop polls terminal input with a short timeout,
//! feeds monotonic elapsed milliseconds into the sequencer, and reacts
//! to the scene events the sequencer emits.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use janchi_config::Config;
use janchi_core::{SceneEvent, SceneId, Sequencer, TAP_ADVANCE_DELAY_MS};
use janchi_effects::EffectsState;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Position, Rect},
    style::Color,
};

use crate::music::MusicControl;
use crate::ui::{self, ButtonId, SceneView};

/// Burst colors for the balloon pop and the heart tap.
const BURST_PINK: Color = Color::Rgb(255, 107, 157);
const BURST_RED: Color = Color::Rgb(255, 23, 68);

/// The main application holding all state.
pub struct App {
    running: bool,
    config: Config,
    sequencer: Sequencer,
    effects: EffectsState,
    music: MusicControl,
    started: Instant,
    /// When the current scene was entered, for entry-relative styling.
    scene_entered_ms: u64,
    /// When the heart was last tapped, for the pulse reaction.
    last_pulse_ms: Option<u64>,
    /// Set once the sequence completes, cleared on the next scene entry.
    completed: bool,
    /// Control rects rendered last frame, for mouse hit-testing.
    buttons: Vec<(Rect, ButtonId)>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let effects = EffectsState::new(config.seed);
        let music = MusicControl::new(config.music_on_start);
        Self {
            running: false,
            sequencer: Sequencer::new(),
            effects,
            music,
            started: Instant::now(),
            scene_entered_ms: 0,
            last_pulse_ms: None,
            completed: false,
            buttons: Vec::new(),
            config,
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now_ms = self.now_ms();
            self.sequencer.tick(now_ms);
            self.process_scene_events(now_ms);
            terminal.draw(|frame| self.render(frame, now_ms))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// React to what the sequencer did this tick: start or stop scene
    /// spawners and fire tap-feedback bursts.
    fn process_scene_events(&mut self, now_ms: u64) {
        for scene_event in self.sequencer.drain_events() {
            match scene_event {
                SceneEvent::Entered(scene) => {
                    self.scene_entered_ms = now_ms;
                    self.completed = false;
                    self.effects.set_fireworks(scene == SceneId::Birthday);
                }
                SceneEvent::BalloonPopped => self.effects.burst_at_center(BURST_PINK),
                SceneEvent::HeartPulsed => {
                    self.last_pulse_ms = Some(now_ms);
                    self.effects.burst_at_center(BURST_RED);
                }
                SceneEvent::Completed => self.completed = true,
            }
        }
    }

    /// Render the effects layer, then the active scene over it.
    fn render(&mut self, frame: &mut Frame, now_ms: u64) {
        let scene = self.sequencer.current();
        self.effects.render(frame, frame.area(), scene, now_ms);

        let view = SceneView {
            recipient: &self.config.recipient,
            balloon_popped: self.sequencer.balloon_popped(),
            question_visible: self.sequencer.question_visible(),
            retry_visible: self.sequencer.retry_visible(),
            heart_pulsing: self
                .last_pulse_ms
                .is_some_and(|t| now_ms.saturating_sub(t) < TAP_ADVANCE_DELAY_MS),
            completed: self.completed,
            music_label: self.music.label(),
            since_entry_ms: now_ms.saturating_sub(self.scene_entered_ms),
        };

        let mut buttons = std::mem::take(&mut self.buttons);
        buttons.clear();
        ui::render_scene(frame, scene, &view, &mut buttons);
        self.buttons = buttons;
    }

    /// Poll and dispatch terminal input. The timeout doubles as the
    /// frame pacing for the animations.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Right) => self.sequencer.advance(),
            (_, KeyCode::Left) => self.sequencer.retreat(),
            (_, KeyCode::Char('m')) => self.music.toggle(),
            (_, KeyCode::Char('y')) => self.sequencer.answer_yes(),
            (_, KeyCode::Char('n')) => self.sequencer.answer_no(),
            (_, KeyCode::Enter | KeyCode::Char(' ')) => self.primary_action(),
            _ => {}
        }
    }

    /// The tap gesture of the current scene.
    fn primary_action(&mut self) {
        match self.sequencer.current() {
            SceneId::Balloon => self.sequencer.tap_balloon(),
            SceneId::Memories | SceneId::Letter => self.sequencer.next(),
            SceneId::Heart => self.sequencer.tap_heart(),
            SceneId::Birthday | SceneId::Final => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.button_at(mouse.column, mouse.row) {
            Some(ButtonId::TapBalloon) => self.sequencer.tap_balloon(),
            Some(ButtonId::Yes) => self.sequencer.answer_yes(),
            Some(ButtonId::No) => self.sequencer.answer_no(),
            Some(ButtonId::Next) => self.sequencer.next(),
            Some(ButtonId::Heart) => self.sequencer.tap_heart(),
            Some(ButtonId::Music) => self.music.toggle(),
            None => {}
        }
    }

    /// Control under the given cell, if any.
    fn button_at(&self, column: u16, row: u16) -> Option<ButtonId> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, id)| *id)
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
