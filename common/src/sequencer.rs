//! Demo step state machine.
//!
//! The demo cycles through four steps on fixed dwell times:
//!
//! | Step | Dwell | Next |
//! |------|-------|------|
//! | [`DemoStep::Startup`] | 5000 ms | Rectangles |
//! | [`DemoStep::Rectangles`] | 3000 ms | Info |
//! | [`DemoStep::Info`] | 3000 ms | OrientationPattern |
//! | [`DemoStep::OrientationPattern`] | 3000 ms | Rectangles |
//!
//! The [`Sequencer`] owns the step, the step start timestamp and the rectangle
//! animation. The main loop passes it the current monotonic time in
//! milliseconds and the [`Scene`] on every poll; it never reads a clock itself,
//! so the same code runs on the ESP32, in the simulator and in tests.

use crate::animation::RectangleAnimation;
use crate::colors::BLACK;
use crate::config::{ENTRY_DRAW_WINDOW_MS, INFO_DWELL_MS, ORIENTATION_DWELL_MS, RECTANGLES_DWELL_MS, STARTUP_DWELL_MS};
use crate::layout::{Layout, render_layout};
use crate::scene::Scene;
use crate::screens::{INFO, ORIENTATION, STARTUP};

/// Steps of the demo sequence.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DemoStep {
    /// Board name and resolution, shown once after boot.
    #[default]
    Startup,
    /// Animated nested rectangles.
    Rectangles,
    /// Static display information.
    Info,
    /// Corner and cross test pattern.
    OrientationPattern,
}

impl DemoStep {
    /// The step that follows this one. Startup is never revisited.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Startup | Self::OrientationPattern => Self::Rectangles,
            Self::Rectangles => Self::Info,
            Self::Info => Self::OrientationPattern,
        }
    }

    /// How long the step stays active before advancing.
    #[inline]
    pub const fn dwell_ms(self) -> u64 {
        match self {
            Self::Startup => STARTUP_DWELL_MS,
            Self::Rectangles => RECTANGLES_DWELL_MS,
            Self::Info => INFO_DWELL_MS,
            Self::OrientationPattern => ORIENTATION_DWELL_MS,
        }
    }

    /// Static layout drawn on entry, if the step has one.
    #[inline]
    pub const fn layout(self) -> Option<&'static Layout> {
        match self {
            Self::Startup => Some(&STARTUP),
            Self::Rectangles => None,
            Self::Info => Some(&INFO),
            Self::OrientationPattern => Some(&ORIENTATION),
        }
    }

    /// Short name for logs.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Rectangles => "rectangles",
            Self::Info => "info",
            Self::OrientationPattern => "orientation",
        }
    }
}

/// Drives the demo: which step is active and what it draws.
#[derive(Clone, Copy, Debug)]
pub struct Sequencer {
    step: DemoStep,
    step_start_ms: u64,
    entry_drawn: bool,
    animation: RectangleAnimation,
}

impl Sequencer {
    /// Start the demo at `now_ms` and draw the startup screen.
    pub fn start(
        now_ms: u64,
        scene: &mut Scene,
    ) -> Self {
        render_layout(scene, &STARTUP);
        Self {
            step: DemoStep::Startup,
            step_start_ms: now_ms,
            entry_drawn: true,
            animation: RectangleAnimation::new(scene.size()),
        }
    }

    #[inline]
    pub const fn step(&self) -> DemoStep { self.step }

    #[inline]
    pub const fn step_start_ms(&self) -> u64 { self.step_start_ms }

    /// Milliseconds spent in the current step.
    #[inline]
    pub const fn elapsed_ms(
        &self,
        now_ms: u64,
    ) -> u64 {
        now_ms.saturating_sub(self.step_start_ms)
    }

    #[inline]
    pub const fn animation(&self) -> &RectangleAnimation { &self.animation }

    /// Run one poll of the demo.
    ///
    /// Draws the current step's content, then advances to the next step once
    /// more than the dwell time has passed. On a transition the scene is cleaned exactly
    /// once and the new step is returned.
    pub fn poll(
        &mut self,
        now_ms: u64,
        scene: &mut Scene,
    ) -> Option<DemoStep> {
        let elapsed = self.elapsed_ms(now_ms);

        match self.step {
            DemoStep::Rectangles => {
                // A full scene keeps the rectangle due for the next poll
                if let Some(rect) = self.animation.next_due(now_ms)
                    && scene.add_filled_rect(rect.area, rect.color).is_some()
                {
                    self.animation.commit(now_ms);
                }
            }
            step => {
                if !self.entry_drawn && elapsed < ENTRY_DRAW_WINDOW_MS {
                    if let Some(layout) = step.layout() {
                        render_layout(scene, layout);
                    }
                    self.entry_drawn = true;
                }
            }
        }

        if elapsed > self.step.dwell_ms() {
            self.advance(now_ms, scene);
            return Some(self.step);
        }
        None
    }

    fn advance(
        &mut self,
        now_ms: u64,
        scene: &mut Scene,
    ) {
        scene.clean();
        self.step = self.step.next();
        self.step_start_ms = now_ms;
        self.entry_drawn = false;

        if self.step == DemoStep::Rectangles {
            self.animation.reset();
            scene.set_background(BLACK);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
