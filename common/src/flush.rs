//! Flush callback between the scene and a physical (or simulated) panel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Transfers a rendered pixel region to the panel.
///
/// `pixels` holds exactly `area.size.width * area.size.height` colors in
/// row-major order. Implementations must be synchronous: the scene reuses the
/// buffer for the next band as soon as this returns.
pub trait Flush {
    fn flush(
        &mut self,
        area: &Rectangle,
        pixels: &[Rgb565],
    );
}

/// Flushes into any RGB565 `DrawTarget` via `fill_contiguous`.
///
/// Used by the simulator, where the target is a `SimulatorDisplay`.
pub struct DisplayFlush<D> {
    display: D,
    flushes: u32,
}

impl<D> DisplayFlush<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub const fn new(display: D) -> Self { Self { display, flushes: 0 } }

    #[inline]
    pub const fn display(&self) -> &D { &self.display }

    /// Total number of regions flushed so far.
    #[inline]
    pub const fn flush_count(&self) -> u32 { self.flushes }

    pub fn into_inner(self) -> D { self.display }
}

impl<D> Flush for DisplayFlush<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn flush(
        &mut self,
        area: &Rectangle,
        pixels: &[Rgb565],
    ) {
        self.display.fill_contiguous(area, pixels.iter().copied()).ok();
        self.flushes = self.flushes.wrapping_add(1);
    }
}
