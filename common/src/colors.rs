//! Color constants for the demo screens.
//!
//! Standard colors come from the `RgbColor` trait constants so they map to the
//! exact channel maxima of the RGB565 format (5 bits red, 6 bits green, 5 bits
//! blue), which is what the ST7789 consumes without conversion.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Default screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Label text and the orientation cross.
pub const WHITE: Rgb565 = Rgb565::WHITE;

pub const RED: Rgb565 = Rgb565::RED;

pub const GREEN: Rgb565 = Rgb565::GREEN;

pub const BLUE: Rgb565 = Rgb565::BLUE;

pub const YELLOW: Rgb565 = Rgb565::YELLOW;

pub const CYAN: Rgb565 = Rgb565::CYAN;

pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors
// =============================================================================

/// Navy (0, 0, 128 in RGB888). Background of the orientation pattern.
/// RGB565: (0, 0, 16) - half-intensity blue.
pub const NAVY: Rgb565 = Rgb565::new(0, 0, 16);

/// Band colors of the nested-rectangle animation, cycled every 20 px of inset.
pub const RECT_PALETTE: [Rgb565; 6] = [RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navy_is_half_blue() {
        assert_eq!(NAVY.r(), 0);
        assert_eq!(NAVY.g(), 0);
        assert_eq!(NAVY.b(), 16);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in RECT_PALETTE.iter().enumerate() {
            for b in &RECT_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
