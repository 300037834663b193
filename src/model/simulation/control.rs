use super::{initial_stats, Simulation};
use crate::model::config::ConfigUpdate;
use evolife_core::Result;
use evolife_data::RunState;
use std::collections::HashMap;

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 5.0;

impl Simulation {
    /// Runs the simulation, populating an empty world first.
    pub fn start(&mut self) {
        if self.run_state == RunState::Running {
            return;
        }
        if self.creatures.is_empty() {
            self.initialize_population();
        }
        tracing::info!(from = ?self.run_state, seed = self.seed, "Simulation started");
        self.run_state = RunState::Running;
    }

    /// Freezes a running simulation. Does nothing in any other state.
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
            tracing::info!(time = self.time_seconds(), "Simulation paused");
        }
    }

    /// Stops the run and starts over with a fresh population.
    pub fn reset(&mut self) {
        self.run_state = RunState::Stopped;
        self.time = 0.0;
        self.generation = 1;
        self.stats = initial_stats();
        self.initialize_population();
        tracing::info!("Simulation reset");
    }

    /// Sets the speed multiplier, clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: f64) {
        let clamped = if speed.is_finite() {
            speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        };
        if clamped != speed {
            tracing::warn!(requested = speed, clamped, "Speed adjusted");
        }
        self.speed = clamped;
    }

    /// Merges the set fields into the configuration; takes effect next tick.
    pub fn update_config(&mut self, update: &ConfigUpdate) {
        self.config = update.apply_to(&self.config);
        tracing::info!(?update, "Configuration updated");
    }

    /// Merges string-keyed tuning values; takes effect next tick.
    ///
    /// Either every entry applies or, on an unknown key or NaN, none do.
    pub fn update_ai_params(&mut self, overrides: &HashMap<String, f64>) -> Result<()> {
        self.params.merge(overrides)?;
        tracing::info!(count = overrides.len(), "Behavior parameters updated");
        Ok(())
    }
}
