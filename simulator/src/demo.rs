//! The demo loop body, shared by the headless and window modes.

use cyd_demo_common::colors::BLACK;
use cyd_demo_common::config::{DRAW_BUFFER_PIXELS, SCREEN_SIZE};
use cyd_demo_common::{DemoStep, DisplayFlush, DrawBuffer, Scene, Sequencer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

/// A step change seen during a tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub from: DemoStep,
    pub to: DemoStep,
    pub at_ms: u64,
}

/// Outcome of one loop iteration.
#[derive(Clone, Copy, Debug)]
pub struct Tick {
    /// Bands flushed by the refresh at the start of the iteration.
    pub flushes: usize,
    pub transition: Option<Transition>,
}

/// Scene, sequencer and simulated panel wired together the same way the
/// firmware wires them to the ST7789.
pub struct Demo {
    scene: Scene,
    buffer: DrawBuffer<DRAW_BUFFER_PIXELS>,
    sequencer: Sequencer,
    panel: DisplayFlush<SimulatorDisplay<Rgb565>>,
}

impl Demo {
    /// Clear the panel and start the sequence at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        let mut display = SimulatorDisplay::new(SCREEN_SIZE);
        display.clear(BLACK).ok();

        let mut scene = Scene::new(SCREEN_SIZE);
        let sequencer = Sequencer::start(now_ms, &mut scene);

        Self {
            scene,
            buffer: DrawBuffer::new(),
            sequencer,
            panel: DisplayFlush::new(display),
        }
    }

    /// One loop iteration: refresh the panel, then poll the sequencer.
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) -> Tick {
        let flushes = self.scene.refresh(&mut self.buffer, &mut self.panel);

        let from = self.sequencer.step();
        let transition = self
            .sequencer
            .poll(now_ms, &mut self.scene)
            .map(|to| Transition { from, to, at_ms: now_ms });

        Tick { flushes, transition }
    }

    #[inline]
    pub const fn step(&self) -> DemoStep { self.sequencer.step() }

    #[inline]
    pub const fn display(&self) -> &SimulatorDisplay<Rgb565> { self.panel.display() }
}
