//! Display driver for the ESP32-2432S028R "Cheap Yellow Display" (ST7789).
//!
//! Pin mapping:
//! - SCLK: GPIO14
//! - MOSI: GPIO13
//! - MISO: GPIO12
//! - CS: GPIO15
//! - DC: GPIO2
//! - Backlight: GPIO21
//! - Reset: not wired (software reset only)

use cyd_demo_common::Flush;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::gpio::Output;
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};

/// Display type alias for the ST7789 on the CYD (no reset pin).
pub type CydDisplay<'d> =
    mipidsi::Display<SpiInterface<'d, ExclusiveDevice<Spi<'d, Blocking>, Output<'d>, NoDelay>, Output<'d>>, ST7789, NoResetPin>;

/// Initialize the CYD panel.
///
/// `buffer` is the interface's staging buffer for pixel bursts.
pub fn init_display<'d>(
    spi: Spi<'d, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    buffer: &'d mut [u8],
) -> CydDisplay<'d> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let di = SpiInterface::new(spi_device, dc, buffer);

    // Native panel is 240x320 portrait; Deg180 is the flipped portrait mode
    Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation::new().rotate(Rotation::Deg180))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut Delay::new())
        .unwrap()
}

/// SPI configuration for the ST7789 display.
///
/// The ST7789 supports up to 62.5MHz SPI clock.
/// We use 40MHz for reliable operation.
pub fn display_spi_config() -> SpiConfig {
    SpiConfig::default()
        .with_frequency(Rate::from_mhz(40))
        .with_mode(Mode::_0)
}

/// Pushes rendered bands from the scene straight into the panel's RAM.
pub struct PanelFlush<'d> {
    display: CydDisplay<'d>,
}

impl<'d> PanelFlush<'d> {
    pub const fn new(display: CydDisplay<'d>) -> Self { Self { display } }
}

impl Flush for PanelFlush<'_> {
    fn flush(
        &mut self,
        area: &Rectangle,
        pixels: &[Rgb565],
    ) {
        let Some(end) = area.bottom_right() else {
            return;
        };
        let start = area.top_left;

        // Sets the column/row window, then streams the band in row-major order
        self.display
            .set_pixels(start.x as u16, start.y as u16, end.x as u16, end.y as u16, pixels.iter().copied())
            .ok();
    }
}
