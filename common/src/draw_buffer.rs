//! Partial render buffer.
//!
//! The scene never renders a full frame. It renders the invalid area band by
//! band into a [`DrawBuffer`] of `N` pixels and flushes each finished band.
//! With `N = SCREEN_WIDTH * 10` this costs 4.8 KB of RAM instead of the
//! 150 KB a full 240x320 RGB565 framebuffer would need.
//!
//! The buffer is a `DrawTarget` whose bounding box is the current band, so
//! anything drawn outside the band is clipped.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::BLACK;

/// Band-sized pixel buffer with clipping.
pub struct DrawBuffer<const N: usize> {
    pixels: [Rgb565; N],
    area: Rectangle,
}

impl<const N: usize> DrawBuffer<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; N],
            area: Rectangle::zero(),
        }
    }

    /// Pixel capacity of the buffer.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Bind the buffer to a new band.
    ///
    /// Returns `false` (and binds nothing) if the band does not fit.
    pub fn begin(
        &mut self,
        area: Rectangle,
    ) -> bool {
        if (area.size.width as usize) * (area.size.height as usize) > N {
            self.area = Rectangle::zero();
            return false;
        }
        self.area = area;
        true
    }

    /// The band currently bound to the buffer.
    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    /// Rendered pixels of the current band in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb565] {
        let len = self.area.size.width as usize * self.area.size.height as usize;
        &self.pixels[..len]
    }

    /// Buffer index of a screen point, if it lies inside the band.
    #[inline]
    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let x = point.x - self.area.top_left.x;
        let y = point.y - self.area.top_left.y;
        if x < 0 || y < 0 || x >= self.area.size.width as i32 || y >= self.area.size.height as i32 {
            return None;
        }
        Some(y as usize * self.area.size.width as usize + x as usize)
    }
}

impl<const N: usize> Default for DrawBuffer<N> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> Dimensions for DrawBuffer<N> {
    fn bounding_box(&self) -> Rectangle { self.area }
}

impl<const N: usize> DrawTarget for DrawBuffer<N> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index(point) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.area);
        if drawable_area.size.width == 0 || drawable_area.size.height == 0 {
            return Ok(());
        }

        let band_width = self.area.size.width as usize;
        let x_start = (drawable_area.top_left.x - self.area.top_left.x) as usize;
        let x_end = x_start + drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = (y - self.area.top_left.y) as usize * band_width;
            self.pixels[row_start + x_start..row_start + x_end].fill(color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let len = self.area.size.width as usize * self.area.size.height as usize;
        self.pixels[..len].fill(color);
        Ok(())
    }
}
