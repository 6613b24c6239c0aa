//! Host-side helpers shared by unit tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::BLACK;
use crate::flush::Flush;

/// Heap-backed RGB565 canvas of arbitrary size.
pub struct Canvas {
    pub size: Size,
    pub pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![BLACK; size.width as usize * size.height as usize],
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[y as usize * self.size.width as usize + x as usize]
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
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
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < self.size.width && (point.y as u32) < self.size.height {
                let idx = point.y as usize * self.size.width as usize + point.x as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

/// Flush target that records every region it receives.
#[derive(Default)]
pub struct RecordingFlush {
    pub areas: Vec<Rectangle>,
    pub pixel_counts: Vec<usize>,
}

impl Flush for RecordingFlush {
    fn flush(
        &mut self,
        area: &Rectangle,
        pixels: &[Rgb565],
    ) {
        self.areas.push(*area);
        self.pixel_counts.push(pixels.len());
    }
}
