//! Tick metrics and structured logging setup.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counts ticks and lifecycle events over the lifetime of a simulation.
#[derive(Debug)]
pub struct Metrics {
    tick_count: u64,
    total_births: u64,
    total_deaths: u64,
    report_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `report_interval` ticks.
    #[must_use]
    pub fn new(report_interval: u64) -> Self {
        Self {
            tick_count: 0,
            total_births: 0,
            total_deaths: 0,
            report_interval: report_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick.
    pub fn record_tick(
        &mut self,
        duration: Duration,
        creatures: usize,
        food: usize,
        births: usize,
        deaths: usize,
    ) {
        self.tick_count += 1;
        self.total_births += births as u64;
        self.total_deaths += deaths as u64;

        if self.tick_count % self.report_interval == 0 {
            tracing::info!(
                tick = self.tick_count,
                creatures = creatures,
                food = food,
                total_births = self.total_births,
                total_deaths = self.total_deaths,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn total_births(&self) -> u64 {
        self.total_births
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.total_deaths
    }

    /// Wall-clock time since the collector was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. Calling this twice is harmless.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
