//! Timing for the simulator.
//!
//! These use `std::time` which is not available in `no_std` environments, so
//! they are defined here rather than in the common crate.

use std::time::{Duration, Instant};

use cyd_demo_common::config::LOOP_DELAY_MS;

#[cfg_attr(not(feature = "window"), allow(dead_code))]
/// Delay between loop iterations, matching the firmware's poll period.
pub const LOOP_DELAY: Duration = Duration::from_millis(LOOP_DELAY_MS);

/// Default headless run length: startup plus two full demo cycles.
pub const DEFAULT_DURATION_MS: u64 = 23_000;

/// Millisecond clock for the demo.
///
/// `Wall` follows real time for the window. `Virtual` advances exactly one
/// loop period per tick, so headless runs are deterministic and instant.
#[derive(Clone, Copy, Debug)]
pub enum DemoClock {
    Wall(Instant),
    Virtual(u64),
}

impl DemoClock {
    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    pub fn wall() -> Self { Self::Wall(Instant::now()) }

    pub const fn virtual_clock() -> Self { Self::Virtual(0) }

    /// Milliseconds since the clock started.
    pub fn now_ms(&self) -> u64 {
        match self {
            Self::Wall(start) => start.elapsed().as_millis() as u64,
            Self::Virtual(now) => *now,
        }
    }

    /// Advance a virtual clock by one loop period. Wall clocks advance on
    /// their own.
    pub fn tick(&mut self) {
        if let Self::Virtual(now) = self {
            *now += LOOP_DELAY_MS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_clock_steps_one_loop_period() {
        let mut clock = DemoClock::virtual_clock();
        assert_eq!(clock.now_ms(), 0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.now_ms(), 2 * LOOP_DELAY_MS);
    }

    #[test]
    fn test_wall_clock_starts_near_zero() {
        let mut clock = DemoClock::wall();
        clock.tick();
        assert!(clock.now_ms() < 1000);
    }
}
