//! Desktop simulator for the ESP32-2432S028R display demo.
//!
//! Runs the same scene, sequencer and flush path as the firmware against an
//! `embedded-graphics-simulator` display. By default it runs headless on a
//! virtual clock and can write one PNG per demo step; with the `window`
//! feature it can also open a live SDL window.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod demo;
mod profiling;
mod timing;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use cyd_demo_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::demo::{Demo, Transition};
use crate::profiling::RefreshMetrics;
use crate::timing::{DEFAULT_DURATION_MS, DemoClock};

#[derive(Parser)]
#[command(name = "cyd-demo-sim")]
#[command(about = "Desktop simulator for the ESP32-2432S028R display demo")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Pixel scale of the output image or window
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,

    /// Write a PNG snapshot of each step just before it ends
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Simulated run length in headless mode
    #[arg(long, default_value_t = DEFAULT_DURATION_MS)]
    duration_ms: u64,

    /// Open a live window instead of running headless
    #[cfg(feature = "window")]
    #[arg(long)]
    window: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("ESP32-2432S028R Display Test");
    info!("Display dimensions: {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);

    let settings = OutputSettingsBuilder::new().scale(cli.scale).build();

    #[cfg(feature = "window")]
    if cli.window {
        return run_window(&settings);
    }

    run_headless(&cli, &settings)
}

/// Run the demo on a virtual clock for `--duration-ms`.
fn run_headless(
    cli: &Cli,
    settings: &OutputSettings,
) -> Result<()> {
    if let Some(dir) = &cli.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut clock = DemoClock::virtual_clock();
    let mut demo = Demo::new(clock.now_ms());
    let mut metrics = RefreshMetrics::new();
    let mut snapshots = 0u32;

    info!(duration_ms = cli.duration_ms, "Running headless");

    while clock.now_ms() <= cli.duration_ms {
        let started = Instant::now();
        let tick = demo.tick(clock.now_ms());
        metrics.record_poll(tick.flushes, started.elapsed());

        if let Some(transition) = tick.transition {
            log_transition(&transition);
            metrics.inc_transitions();

            // The panel still shows the finished step: refresh ran before the poll
            if let Some(dir) = &cli.out_dir {
                let path = dir.join(format!("{snapshots:02}-{}.png", transition.from.name()));
                demo.display()
                    .to_rgb_output_image(settings)
                    .save_png(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                debug!(path = %path.display(), "Snapshot written");
                snapshots += 1;
            }
        }

        clock.tick();
    }

    info!(final_step = demo.step().name(), snapshots, "Headless run complete");
    metrics.log_summary();
    Ok(())
}

/// Run the demo in real time in an SDL window until it is closed.
#[cfg(feature = "window")]
fn run_window(settings: &OutputSettings) -> Result<()> {
    use std::thread;

    use embedded_graphics_simulator::{SimulatorEvent, Window};

    use crate::timing::LOOP_DELAY;

    let mut window = Window::new("ESP32-2432S028R Display Test", settings);
    let clock = DemoClock::wall();
    let mut demo = Demo::new(clock.now_ms());
    let mut metrics = RefreshMetrics::new();

    'running: loop {
        let frame_start = Instant::now();

        let tick = demo.tick(clock.now_ms());
        metrics.record_poll(tick.flushes, frame_start.elapsed());
        if let Some(transition) = tick.transition {
            log_transition(&transition);
            metrics.inc_transitions();
        }

        window.update(demo.display());
        for event in window.events() {
            if matches!(event, SimulatorEvent::Quit) {
                break 'running;
            }
        }

        if let Some(rest) = LOOP_DELAY.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    metrics.log_summary();
    Ok(())
}

fn log_transition(transition: &Transition) {
    debug!(
        from = transition.from.name(),
        to = transition.to.name(),
        at_ms = transition.at_ms,
        "Step change"
    );
}
