//! Display demo firmware for the ESP32-2432S028R ("Cheap Yellow Display").
//!
//! Cycles startup, nested rectangles, display info and an orientation test
//! pattern on the built-in 2.8" ST7789 panel.

#![no_std]
#![no_main]

mod display;

use cyd_demo_common::colors::BLACK;
use cyd_demo_common::config::{DRAW_BUFFER_PIXELS, LOOP_DELAY_MS, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
use cyd_demo_common::{DrawBuffer, Scene, Sequencer};
use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use embedded_graphics::prelude::*;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::spi::master::Spi;
use esp_hal::timer::timg::TimerGroup;
use {esp_backtrace as _, esp_println as _};

use crate::display::{PanelFlush, display_spi_config, init_display};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let p = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(p.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Backlight on before anything is drawn
    let _backlight = Output::new(p.GPIO21, Level::High, OutputConfig::default());

    info!("ESP32-2432S028R Display Test");

    // CYD pinout: SCLK=14, MOSI=13, MISO=12, CS=15, DC=2
    let cs = Output::new(p.GPIO15, Level::High, OutputConfig::default());
    let dc = Output::new(p.GPIO2, Level::Low, OutputConfig::default());

    let spi = Spi::new(p.SPI2, display_spi_config())
        .unwrap()
        .with_sck(p.GPIO14)
        .with_mosi(p.GPIO13)
        .with_miso(p.GPIO12);

    let mut spi_buffer = [0u8; 512];
    let mut display = init_display(spi, cs, dc, &mut spi_buffer);

    info!("Display dimensions: {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);

    display.clear(BLACK).ok();
    let mut panel = PanelFlush::new(display);

    let mut scene = Scene::new(SCREEN_SIZE);
    let mut draw_buffer: DrawBuffer<DRAW_BUFFER_PIXELS> = DrawBuffer::new();
    let mut sequencer = Sequencer::start(Instant::now().as_millis(), &mut scene);

    info!("Graphics initialization complete!");

    loop {
        scene.refresh(&mut draw_buffer, &mut panel);

        let now = Instant::now().as_millis();
        if let Some(step) = sequencer.poll(now, &mut scene) {
            debug!("Step -> {} at {} ms", step.name(), now);
        }

        Timer::after_millis(LOOP_DELAY_MS).await;
    }
}
