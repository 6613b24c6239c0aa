//! Orientation test pattern.
//!
//! Four colored corner squares with their names, a white cross through the
//! center and a "Portrait Flip / MODE" badge. A wrong panel rotation shows up
//! as corners landing in the wrong place.

use crate::colors::{BLACK, CYAN, GREEN, NAVY, RED, WHITE, YELLOW};
use crate::config::{CENTER_X, CENTER_Y, HEIGHT_I32, SCREEN_HEIGHT, SCREEN_WIDTH, WIDTH_I32};
use crate::layout::{Layout, LayoutItem};

/// Side of the corner squares.
const CORNER: u32 = 40;
const CORNER_I32: i32 = CORNER as i32;

/// Thickness of the center cross bars.
const BAR: u32 = 10;
const HALF_BAR: i32 = (BAR / 2) as i32;

/// Offset of corner names from the right/bottom screen edge.
const LABEL_INSET: i32 = 25;

const ITEMS: [LayoutItem; 12] = [
    // Corner squares
    LayoutItem::fill(0, 0, CORNER, CORNER, GREEN),
    LayoutItem::fill(WIDTH_I32 - CORNER_I32, 0, CORNER, CORNER, RED),
    LayoutItem::fill(0, HEIGHT_I32 - CORNER_I32, CORNER, CORNER, YELLOW),
    LayoutItem::fill(WIDTH_I32 - CORNER_I32, HEIGHT_I32 - CORNER_I32, CORNER, CORNER, CYAN),
    // Center cross
    LayoutItem::fill(CENTER_X - HALF_BAR, 0, BAR, SCREEN_HEIGHT, WHITE),
    LayoutItem::fill(0, CENTER_Y - HALF_BAR, SCREEN_WIDTH, BAR, WHITE),
    // Corner names
    LayoutItem::label("TL", 5, 15, BLACK),
    LayoutItem::label("TR", WIDTH_I32 - LABEL_INSET, 15, BLACK),
    LayoutItem::label("BL", 5, HEIGHT_I32 - LABEL_INSET, BLACK),
    LayoutItem::label("BR", WIDTH_I32 - LABEL_INSET, HEIGHT_I32 - LABEL_INSET, BLACK),
    // Center badge
    LayoutItem::badge("Portrait Flip", CENTER_X - 60, CENTER_Y - 20, BLACK, WHITE),
    LayoutItem::badge("MODE", CENTER_X - 30, CENTER_Y + 5, BLACK, WHITE),
];

pub const ORIENTATION: Layout = Layout {
    background: NAVY,
    items: &ITEMS,
};

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::{Point, Size};
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::config::{DRAW_BUFFER_PIXELS, SCREEN_SIZE};
    use crate::draw_buffer::DrawBuffer;
    use crate::flush::DisplayFlush;
    use crate::layout::render_layout;
    use crate::scene::Scene;
    use crate::test_support::Canvas;

    fn rendered() -> Canvas {
        let mut scene = Scene::new(SCREEN_SIZE);
        let mut buffer: DrawBuffer<DRAW_BUFFER_PIXELS> = DrawBuffer::new();
        let mut flush = DisplayFlush::new(Canvas::new(SCREEN_SIZE));
        render_layout(&mut scene, &ORIENTATION);
        scene.refresh(&mut buffer, &mut flush);
        flush.into_inner()
    }

    #[test]
    fn test_corner_squares_sit_in_their_corners() {
        let canvas = rendered();
        assert_eq!(canvas.pixel(0, 0), GREEN);
        assert_eq!(canvas.pixel(239, 0), RED);
        assert_eq!(canvas.pixel(0, 319), YELLOW);
        assert_eq!(canvas.pixel(239, 319), CYAN);
    }

    #[test]
    fn test_cross_and_background() {
        let canvas = rendered();
        assert_eq!(canvas.pixel(CENTER_X, 60), WHITE);
        assert_eq!(canvas.pixel(20, CENTER_Y), WHITE);
        assert_eq!(canvas.pixel(60, 60), NAVY);
    }

    #[test]
    fn test_corner_squares_geometry() {
        let mut scene = Scene::new(SCREEN_SIZE);
        render_layout(&mut scene, &ORIENTATION);
        let corners: Vec<_> = scene.widgets()[..4].iter().map(|w| w.bounds()).collect();
        assert_eq!(
            corners,
            [
                Rectangle::new(Point::new(0, 0), Size::new(40, 40)),
                Rectangle::new(Point::new(200, 0), Size::new(40, 40)),
                Rectangle::new(Point::new(0, 280), Size::new(40, 40)),
                Rectangle::new(Point::new(200, 280), Size::new(40, 40)),
            ]
        );
    }

    #[test]
    fn test_badge_stays_on_screen() {
        let mut scene = Scene::new(SCREEN_SIZE);
        render_layout(&mut scene, &ORIENTATION);
        let screen = Rectangle::new(Point::zero(), SCREEN_SIZE);
        for widget in scene.widgets() {
            assert_eq!(widget.bounds().intersection(&screen), widget.bounds());
        }
    }
}
