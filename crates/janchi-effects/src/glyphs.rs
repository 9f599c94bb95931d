//! Glyph and color constants for the particle effects.

use ratatui::style::Color;

/// Heart glyphs for burst particles and ambient floaters.
pub const HEART_GLYPHS: &[char] = &['♥', '♡', '❤', '❥', '❣'];

/// Glyphs for the intro twinkle field.
pub const TWINKLE_GLYPHS: &[char] = &['.', '*', '·', '✦', '✧'];

/// Glyph set for the letter scene's floaters (a single soft heart).
pub const LETTER_HEART_GLYPHS: &[char] = &['♡'];

/// Glyph set for the closing scene's floating hearts.
pub const FINAL_HEART_GLYPHS: &[char] = &['❤'];

/// Glyph set for the closing floating stars (single static glyph).
pub const STAR_GLYPHS: &[char] = &['★'];

/// Glyphs for firework spark particles.
pub const SPARK_GLYPHS: &[char] = &['•', '✦', '*', '·'];

/// Firework palette: red, pink, gold, cyan, magenta.
pub const FIREWORK_PALETTE: [Color; 5] = [
    Color::Rgb(255, 23, 68),
    Color::Rgb(255, 107, 157),
    Color::Rgb(255, 215, 0),
    Color::Rgb(0, 212, 255),
    Color::Rgb(255, 0, 255),
];

/// Pink used for heart bursts and floaters.
pub const HEART_PINK: Color = Color::Rgb(255, 107, 157);

/// Softer rose for secondary hearts.
pub const HEART_ROSE: Color = Color::Rgb(255, 64, 129);

/// Warm gold for stars.
pub const STAR_GOLD: Color = Color::Rgb(255, 215, 0);

/// Scale an RGB color by an opacity in [0, 1]; terminal cells have no
/// alpha, so fading is rendered by dimming toward black.
pub fn dim(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * opacity) as u8,
            (g as f32 * opacity) as u8,
            (b as f32 * opacity) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_clamps() {
        assert_eq!(dim(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim(Color::Rgb(200, 100, 50), 2.0), Color::Rgb(200, 100, 50));
        assert_eq!(dim(Color::Rgb(200, 100, 50), -1.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_palette_size() {
        assert_eq!(FIREWORK_PALETTE.len(), 5);
    }
}
