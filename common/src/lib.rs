//! Platform-agnostic core of the ESP32-2432S028R display demo.
//!
//! This crate holds everything shared between the ESP32 firmware and the
//! desktop simulator:
//!
//! - [`colors`]: RGB565 color constants
//! - [`config`]: Display geometry, timing and buffer constants
//! - [`styles`]: Fonts used by labels
//! - [`scene`]: Retained widget container with dirty-area tracking
//! - [`draw_buffer`]: Partial render buffer the scene draws bands into
//! - [`flush`]: The flush callback that moves rendered bands to a panel
//! - [`layout`]: Data-driven static layouts and the routine that renders them
//! - [`screens`]: The three static screen tables (startup, info, orientation)
//! - [`animation`]: Nested-rectangle animation state
//! - [`sequencer`]: The demo step state machine
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p cyd-demo-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animation;
pub mod colors;
pub mod config;
pub mod draw_buffer;
pub mod flush;
pub mod layout;
pub mod scene;
pub mod screens;
pub mod sequencer;
pub mod styles;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use draw_buffer::DrawBuffer;
pub use flush::{DisplayFlush, Flush};
pub use scene::{Scene, WidgetId};
pub use sequencer::{DemoStep, Sequencer};
