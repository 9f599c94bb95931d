//! ASCII art for the janchi scenes.

/// The intro balloon (9 lines tall).
pub const BALLOON: [&str; 9] = [
    "   ▄▄▄▄▄▄▄   ",
    " ▄█████████▄ ",
    "█████████████",
    "█████████████",
    " ▀█████████▀ ",
    "   ▀█████▀   ",
    "     ▀█▀     ",
    "      ▒      ",
    "      ▒      ",
];

/// What remains after the balloon pops.
pub const BALLOON_POPPED: [&str; 9] = [
    "             ",
    "   ·  ✶  ·   ",
    "  ✶       ✶  ",
    " ·    ✷    · ",
    "  ✶       ✶  ",
    "   ·  ✶  ·   ",
    "             ",
    "      ▒      ",
    "      ▒      ",
];

/// The interactive heart, resting frame (7 lines tall).
pub const HEART: [&str; 7] = [
    "  ▄███▄ ▄███▄  ",
    " █████████████ ",
    " █████████████ ",
    "  ▀█████████▀  ",
    "    ▀█████▀    ",
    "      ▀█▀      ",
    "       ▀       ",
];

/// The interactive heart, swollen pulse frame.
pub const HEART_PULSE: [&str; 7] = [
    " ▄████▄ ▄████▄ ",
    "███████████████",
    "███████████████",
    " ▀███████████▀ ",
    "   ▀███████▀   ",
    "     ▀███▀     ",
    "      ▀█▀      ",
];

/// The birthday cake (7 lines tall).
pub const CAKE: [&str; 7] = [
    "   i  i  i   ",
    "   |  |  |   ",
    " ▄▄▄▄▄▄▄▄▄▄▄ ",
    " █▒▒▒▒▒▒▒▒▒█ ",
    " ███████████ ",
    " █▒▒▒▒▒▒▒▒▒█ ",
    " ███████████ ",
];

/// The sealed letter envelope (6 lines tall).
pub const ENVELOPE: [&str; 6] = [
    "▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄",
    "█▀▄           ▄▀█",
    "█   ▀▄     ▄▀   █",
    "█     ▀▄ ▄▀     █",
    "█       ♥       █",
    "▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rectangular(art: &[&str]) {
        let width = art[0].chars().count();
        for line in art {
            assert_eq!(line.chars().count(), width);
        }
    }

    #[test]
    fn test_art_lines_rectangular() {
        assert_rectangular(&BALLOON);
        assert_rectangular(&BALLOON_POPPED);
        assert_rectangular(&HEART);
        assert_rectangular(&HEART_PULSE);
        assert_rectangular(&CAKE);
        assert_rectangular(&ENVELOPE);
    }

    #[test]
    fn test_pulse_frame_matches_height() {
        assert_eq!(HEART.len(), HEART_PULSE.len());
        assert_eq!(BALLOON.len(), BALLOON_POPPED.len());
    }
}
