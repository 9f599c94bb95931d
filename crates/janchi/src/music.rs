//! The background music toggle.
//!
//! Terminals have no audio subsystem, so this control only tracks the
//! binary play/pause state and its label; the missing capability is
//! tolerated locally and playback is simply skipped.

/// Binary play/pause state for the music control.
#[derive(Debug, Clone, Copy)]
pub struct MusicControl {
    playing: bool,
}

impl MusicControl {
    pub fn new(playing: bool) -> Self {
        Self { playing }
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Label shown on the toggle control.
    pub fn label(&self) -> &'static str {
        if self.playing { "🔊 music" } else { "🔇 music" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state_and_label() {
        let mut music = MusicControl::new(false);
        assert!(!music.playing());
        assert_eq!(music.label(), "🔇 music");
        music.toggle();
        assert!(music.playing());
        assert_eq!(music.label(), "🔊 music");
        music.toggle();
        assert!(!music.playing());
    }
}
