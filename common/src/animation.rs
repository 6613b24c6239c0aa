//! Nested-rectangle animation.
//!
//! Every [`RECT_STEP_INTERVAL_MS`] the animation emits one more rectangle,
//! inset [`RECT_INSET_STEP`] pixels further from the screen edge than the
//! previous one and colored by its 20 px band:
//!
//! ```text
//! inset:  0    20    40     60      80    100
//! color:  RED  GREEN BLUE   YELLOW  CYAN  MAGENTA
//! ```
//!
//! When the next rectangle would reach past half the shorter screen side the
//! animation completes and stays idle until [`RectangleAnimation::reset`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::RECT_PALETTE;
use crate::config::{RECT_INSET_STEP, RECT_STEP_INTERVAL_MS};

/// A rectangle produced by one animation step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InsetRect {
    pub inset: u32,
    pub area: Rectangle,
    pub color_index: usize,
    pub color: Rgb565,
}

/// Palette index for a given inset: one color per 20 px band, cycling.
#[inline]
pub const fn color_index_for_inset(inset: u32) -> usize { (inset / RECT_INSET_STEP) as usize % RECT_PALETTE.len() }

/// Animation sub-state of the rectangles step.
#[derive(Clone, Copy, Debug)]
pub struct RectangleAnimation {
    screen: Size,
    inset: u32,
    last_step_ms: Option<u64>,
    complete: bool,
    drawn: u32,
}

impl RectangleAnimation {
    pub const fn new(screen: Size) -> Self {
        Self {
            screen,
            inset: 0,
            last_step_ms: None,
            complete: false,
            drawn: 0,
        }
    }

    /// Return to the initial state: inset 0, not complete, first rectangle
    /// due on the next poll.
    pub fn reset(&mut self) {
        self.inset = 0;
        self.last_step_ms = None;
        self.complete = false;
        self.drawn = 0;
    }

    /// Inset of the next rectangle.
    #[inline]
    pub const fn inset(&self) -> u32 { self.inset }

    #[inline]
    pub const fn is_complete(&self) -> bool { self.complete }

    /// Rectangles emitted since the last reset.
    #[inline]
    pub const fn drawn(&self) -> u32 { self.drawn }

    /// Largest inset any rectangle may reach: half the shorter screen side.
    #[inline]
    pub const fn max_inset(&self) -> u32 {
        let shorter = if self.screen.width < self.screen.height {
            self.screen.width
        } else {
            self.screen.height
        };
        shorter / 2
    }

    /// Rectangles one activation draws: `floor(max_inset / 20)`.
    #[inline]
    pub const fn total_steps(&self) -> u32 { self.max_inset() / RECT_INSET_STEP }

    /// Advance the animation. Returns the rectangle to draw, if one is due.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> Option<InsetRect> {
        let rect = self.next_due(now_ms)?;
        self.commit(now_ms);
        Some(rect)
    }

    /// The rectangle due at `now_ms` without consuming it.
    ///
    /// Marks the animation complete once the next inset would pass
    /// [`Self::max_inset`]. Call [`Self::commit`] after the rectangle is
    /// actually placed.
    pub fn next_due(
        &mut self,
        now_ms: u64,
    ) -> Option<InsetRect> {
        if self.complete {
            return None;
        }
        if let Some(last) = self.last_step_ms
            && now_ms.saturating_sub(last) <= RECT_STEP_INTERVAL_MS
        {
            return None;
        }

        if self.inset + RECT_INSET_STEP > self.max_inset() {
            self.complete = true;
            self.inset = 0;
            return None;
        }

        let inset = self.inset;
        let color_index = color_index_for_inset(inset);
        Some(InsetRect {
            inset,
            area: Rectangle::new(
                Point::new(inset as i32, inset as i32),
                Size::new(self.screen.width - 2 * inset, self.screen.height - 2 * inset),
            ),
            color_index,
            color: RECT_PALETTE[color_index],
        })
    }

    /// Move past the rectangle returned by [`Self::next_due`].
    pub fn commit(
        &mut self,
        now_ms: u64,
    ) {
        self.inset += RECT_INSET_STEP;
        self.last_step_ms = Some(now_ms);
        self.drawn += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{MAGENTA, RED};
    use crate::config::SCREEN_SIZE;

    /// Poll every 5 ms from `start` until `end` (inclusive), collecting output.
    fn run(
        anim: &mut RectangleAnimation,
        start: u64,
        end: u64,
    ) -> Vec<InsetRect> {
        (start..=end).step_by(5).filter_map(|t| anim.poll(t)).collect()
    }

    #[test]
    fn test_first_rectangle_is_immediate() {
        let mut anim = RectangleAnimation::new(SCREEN_SIZE);
        let rect = anim.poll(1234).unwrap();
        assert_eq!(rect.inset, 0);
        assert_eq!(rect.area, Rectangle::new(Point::zero(), SCREEN_SIZE));
        assert_eq!(rect.color, RED);
        assert_eq!(anim.inset(), 20);
    }

    #[test]
    fn test_step_interval_is_strictly_greater_than_200ms() {
        let mut anim = RectangleAnimation::new(SCREEN_SIZE);
        anim.poll(0).unwrap();
        assert!(anim.poll(200).is_none());
        assert!(anim.poll(201).is_some());
    }

    #[test]
    fn test_full_activation_draws_floor_half_over_twenty() {
        let mut anim = RectangleAnimation::new(SCREEN_SIZE);
        let rects = run(&mut anim, 0, 3000);

        assert_eq!(anim.total_steps(), 6);
        assert_eq!(rects.len(), 6);
        assert_eq!(anim.drawn(), 6);
        assert!(anim.is_complete());
        assert_eq!(anim.inset(), 0);
    }

    #[test]
    fn test_insets_increase_and_colors_cycle() {
        let mut anim = RectangleAnimation::new(SCREEN_SIZE);
        let rects = run(&mut anim, 0, 3000);

        for pair in rects.windows(2) {
            assert!(pair[1].inset > pair[0].inset);
        }
        for rect in &rects {
            assert_eq!(rect.color_index, (rect.inset / 20) as usize % 6);
            assert_eq!(rect.color, RECT_PALETTE[rect.color_index]);
        }
        assert_eq!(rects.last().unwrap().color, MAGENTA);
    }

    #[test]
    fn test_rectangles_are_concentric() {
        let mut anim = RectangleAnimation::new(SCREEN_SIZE);
        let rects = run(&mut anim, 0, 3000);

        let last = rects.last().unwrap();
        assert_eq!(last.inset, 100);
        assert_eq!(last.area, Rectangle::new(Point::new(100, 100), Size::new(40, 120)));
        for rect in &rects {
            let center = rect.area.center();
            assert_eq!(center, Rectangle::new(Point::zero(), SCREEN_SIZE).center());
        }
    }

    #[test]
    fn test_completion_is_idle_until_reset() {
        let mut anim = RectangleAnimation::new(SCREEN_SIZE);
        run(&mut anim, 0, 3000);
        assert!(anim.poll(10_000).is_none());

        anim.reset();
        assert!(!anim.is_complete());
        assert_eq!(anim.inset(), 0);
        assert_eq!(anim.drawn(), 0);
        assert_eq!(anim.poll(10_001).unwrap().inset, 0);
    }

    #[test]
    fn test_odd_screen_uses_floor() {
        // Shorter side 250 -> max inset 125 -> 6 rectangles (insets 0..=100)
        let mut anim = RectangleAnimation::new(Size::new(250, 400));
        let rects = run(&mut anim, 0, 5000);
        assert_eq!(rects.len(), 6);
        assert_eq!(anim.total_steps(), 6);
    }

    #[test]
    fn test_uncommitted_rectangle_stays_due() {
        let mut anim = RectangleAnimation::new(SCREEN_SIZE);
        let first = anim.next_due(0).unwrap();
        assert_eq!(anim.drawn(), 0);
        assert_eq!(anim.next_due(5), Some(first));

        anim.commit(5);
        assert_eq!(anim.drawn(), 1);
        assert_eq!(anim.inset(), 20);
        assert!(anim.next_due(205).is_none());
        assert_eq!(anim.next_due(206).unwrap().inset, 20);
    }

    #[test]
    fn test_color_index_wraps_after_six_bands() {
        assert_eq!(color_index_for_inset(0), 0);
        assert_eq!(color_index_for_inset(19), 0);
        assert_eq!(color_index_for_inset(100), 5);
        assert_eq!(color_index_for_inset(120), 0);
    }
}
