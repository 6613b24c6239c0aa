//! Display, timing and buffer configuration constants.
//!
//! Layout values such as the screen center are computed at compile time so the
//! static layout tables in [`crate::screens`] can be `const`.

use embedded_graphics::geometry::Size;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ESP32-2432S028R in portrait: 240x320).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

pub const SCREEN_SIZE: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

/// Screen width as i32 for coordinate math in layout tables.
pub const WIDTH_I32: i32 = SCREEN_WIDTH as i32;

/// Screen height as i32 for coordinate math in layout tables.
pub const HEIGHT_I32: i32 = SCREEN_HEIGHT as i32;

/// Screen center X coordinate.
pub const CENTER_X: i32 = WIDTH_I32 / 2;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = HEIGHT_I32 / 2;

// =============================================================================
// Rendering
// =============================================================================

/// Number of full screen lines the partial draw buffer holds.
pub const DRAW_BUFFER_LINES: usize = 10;

/// Pixel capacity of the partial draw buffer (ten full lines).
pub const DRAW_BUFFER_PIXELS: usize = SCREEN_WIDTH as usize * DRAW_BUFFER_LINES;

/// Maximum number of widgets alive on the screen at once.
pub const MAX_WIDGETS: usize = 32;

// =============================================================================
// Demo Timing (milliseconds)
// =============================================================================

/// Delay between polling loop iterations.
pub const LOOP_DELAY_MS: u64 = 5;

/// How long the startup message stays up.
pub const STARTUP_DWELL_MS: u64 = 5000;

/// How long the nested-rectangle animation step lasts.
pub const RECTANGLES_DWELL_MS: u64 = 3000;

/// How long the info screen stays up.
pub const INFO_DWELL_MS: u64 = 3000;

/// How long the orientation pattern stays up.
pub const ORIENTATION_DWELL_MS: u64 = 3000;

/// Static screens are only built within this window after their step starts.
pub const ENTRY_DRAW_WINDOW_MS: u64 = 100;

/// Minimum time between two rectangles of the animation.
pub const RECT_STEP_INTERVAL_MS: u64 = 200;

/// Inset growth per rectangle, also the width of one palette color band.
pub const RECT_INSET_STEP: u32 = 20;
