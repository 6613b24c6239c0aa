//! Refresh timing and flush counters.

use std::time::Duration;

use tracing::info;

/// Per-iteration render statistics for the demo loop.
#[derive(Debug)]
pub struct RefreshMetrics {
    // Render timing (microseconds)
    pub render_time_us: u32,
    pub render_time_min_us: u32,
    pub render_time_max_us: u32,
    render_time_avg_us: f32,

    // Counters
    pub total_polls: u64,
    pub total_flushes: u64,
    pub idle_polls: u64,
    pub max_flushes_per_poll: usize,
    pub transitions: u32,
}

impl RefreshMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub const fn new() -> Self {
        Self {
            render_time_us: 0,
            render_time_min_us: u32::MAX,
            render_time_max_us: 0,
            render_time_avg_us: 0.0,
            total_polls: 0,
            total_flushes: 0,
            idle_polls: 0,
            max_flushes_per_poll: 0,
            transitions: 0,
        }
    }

    /// Record one loop iteration: how many bands were flushed and how long
    /// refresh plus poll took.
    pub fn record_poll(
        &mut self,
        flushes: usize,
        render_time: Duration,
    ) {
        let render_us = render_time.as_micros() as u32;

        self.render_time_us = render_us;
        self.render_time_min_us = self.render_time_min_us.min(render_us);
        self.render_time_max_us = self.render_time_max_us.max(render_us);

        if self.total_polls == 0 {
            self.render_time_avg_us = render_us as f32;
        } else {
            self.render_time_avg_us =
                Self::EMA_ALPHA.mul_add(render_us as f32, (1.0 - Self::EMA_ALPHA) * self.render_time_avg_us);
        }

        self.total_polls += 1;
        self.total_flushes += flushes as u64;
        self.max_flushes_per_poll = self.max_flushes_per_poll.max(flushes);
        if flushes == 0 {
            self.idle_polls += 1;
        }
    }

    #[inline]
    pub fn inc_transitions(&mut self) { self.transitions += 1; }

    /// Get average render time in microseconds.
    #[inline]
    pub const fn render_time_avg_us(&self) -> u32 { self.render_time_avg_us as u32 }

    /// Emit a one-line summary at info level.
    pub fn log_summary(&self) {
        info!(
            polls = self.total_polls,
            idle_polls = self.idle_polls,
            flushes = self.total_flushes,
            max_flushes_per_poll = self.max_flushes_per_poll,
            transitions = self.transitions,
            render_avg_us = self.render_time_avg_us(),
            render_max_us = self.render_time_max_us,
            "demo finished"
        );
    }
}

impl Default for RefreshMetrics {
    fn default() -> Self { Self::new() }
}
