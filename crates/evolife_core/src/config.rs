//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration that maps to `config.toml`.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Runtime updates through [`ConfigUpdate`] (next tick onwards)
//!
//! Numeric values are clamped into range rather than rejected so a
//! simulation is always runnable.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [simulation]
//! world_size = 40.0
//! max_predators = 15
//! max_prey = 30
//! seed = 42
//!
//! [behavior]
//! hunt_range = 15.0
//!
//! [logging]
//! level = "info"
//! ```

use crate::error::{Result, SimError};
use crate::params::BehaviorParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest world the boundary logic handles sensibly.
pub const MIN_WORLD_SIZE: f64 = 5.0;

/// How reproducing creatures are matched in the reproduction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// Index-adjacent pairs in list order.
    #[default]
    Sequential,
    /// Each creature, in list order, takes its nearest unpaired partner.
    Nearest,
}

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Full edge length of the square world, centred on the origin.
    pub world_size: f64,
    pub max_predators: usize,
    pub max_prey: usize,
    pub max_food: usize,
    /// Food spawn chance per wall-clock second of frame time, divided by three.
    pub food_spawn_rate: f64,
    pub mutation_rate: f64,
    /// Age in sim units after which the reproduced flag is cleared.
    pub reproduction_cooldown: f64,
    /// Energy lost per sim unit.
    pub energy_decay_rate: f64,
    /// Sim units per simulated second.
    pub time_scale: f64,
    pub seed: Option<u64>,
    pub pairing: PairingStrategy,
    /// Simulated seconds between history samples.
    pub history_interval: f64,
    pub history_capacity: usize,
    /// Largest wall-clock delta the frame driver forwards, in seconds.
    pub max_frame_delta: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_size: 40.0,
            max_predators: 15,
            max_prey: 30,
            max_food: 50,
            food_spawn_rate: 0.5,
            mutation_rate: 0.15,
            reproduction_cooldown: 3000.0,
            energy_decay_rate: 0.01,
            time_scale: 1000.0,
            seed: None,
            pairing: PairingStrategy::Sequential,
            history_interval: 2.0,
            history_capacity: 100,
            max_frame_delta: 1.0 / 30.0,
        }
    }
}

fn clamp_field(name: &str, value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    let clamped = if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    };
    if clamped != value {
        tracing::warn!(field = name, value, clamped, "Config value clamped");
    }
    clamped
}

impl SimulationConfig {
    /// Returns a copy with every numeric field forced into range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        Self {
            world_size: clamp_field(
                "world_size",
                self.world_size,
                MIN_WORLD_SIZE,
                10_000.0,
                d.world_size,
            ),
            food_spawn_rate: clamp_field(
                "food_spawn_rate",
                self.food_spawn_rate,
                0.0,
                1_000.0,
                d.food_spawn_rate,
            ),
            mutation_rate: clamp_field(
                "mutation_rate",
                self.mutation_rate,
                0.0,
                1.0,
                d.mutation_rate,
            ),
            reproduction_cooldown: clamp_field(
                "reproduction_cooldown",
                self.reproduction_cooldown,
                0.0,
                f64::MAX,
                d.reproduction_cooldown,
            ),
            energy_decay_rate: clamp_field(
                "energy_decay_rate",
                self.energy_decay_rate,
                0.0,
                1_000.0,
                d.energy_decay_rate,
            ),
            time_scale: clamp_field("time_scale", self.time_scale, 1e-3, 1e6, d.time_scale),
            history_interval: clamp_field(
                "history_interval",
                self.history_interval,
                0.0,
                f64::MAX,
                d.history_interval,
            ),
            history_capacity: self.history_capacity.max(1),
            max_frame_delta: clamp_field(
                "max_frame_delta",
                self.max_frame_delta,
                1e-4,
                10.0,
                d.max_frame_delta,
            ),
            ..self.clone()
        }
    }

    /// Half the world edge minus `margin`: the largest |x| or |z| a creature may hold.
    #[must_use]
    pub fn boundary(&self, margin: f64) -> f64 {
        (self.world_size / 2.0 - margin).max(0.0)
    }

    #[must_use]
    pub fn cap_for(&self, species: evolife_data::Species) -> usize {
        match species {
            evolife_data::Species::Predator => self.max_predators,
            evolife_data::Species::Prey => self.max_prey,
        }
    }
}

/// Partial override of [`SimulationConfig`]. Unset fields keep their value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigUpdate {
    pub world_size: Option<f64>,
    pub max_predators: Option<usize>,
    pub max_prey: Option<usize>,
    pub max_food: Option<usize>,
    pub food_spawn_rate: Option<f64>,
    pub mutation_rate: Option<f64>,
    pub reproduction_cooldown: Option<f64>,
    pub energy_decay_rate: Option<f64>,
    pub pairing: Option<PairingStrategy>,
}

impl ConfigUpdate {
    /// Merges the set fields over `base` and sanitizes the result.
    #[must_use]
    pub fn apply_to(&self, base: &SimulationConfig) -> SimulationConfig {
        let mut merged = base.clone();
        if let Some(v) = self.world_size {
            merged.world_size = v;
        }
        if let Some(v) = self.max_predators {
            merged.max_predators = v;
        }
        if let Some(v) = self.max_prey {
            merged.max_prey = v;
        }
        if let Some(v) = self.max_food {
            merged.max_food = v;
        }
        if let Some(v) = self.food_spawn_rate {
            merged.food_spawn_rate = v;
        }
        if let Some(v) = self.mutation_rate {
            merged.mutation_rate = v;
        }
        if let Some(v) = self.reproduction_cooldown {
            merged.reproduction_cooldown = v;
        }
        if let Some(v) = self.energy_decay_rate {
            merged.energy_decay_rate = v;
        }
        if let Some(v) = self.pairing {
            merged.pairing = v;
        }
        merged.sanitized()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Ticks between summary log lines.
    pub report_interval: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            report_interval: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub behavior: BehaviorParams,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parses `config.toml` content and clamps every value into range.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        Ok(config.sanitized())
    }

    /// Loads configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::from(e).with_context(format!("reading {}", path.display())))?;
        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("parsing {}", path.display())))
    }

    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            simulation: self.simulation.sanitized(),
            behavior: self.behavior.sanitized(),
            logging: self.logging.clone(),
        }
    }

    /// SHA-256 over the tunables, for tagging runs in logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.simulation).as_bytes());
        hasher.update(format!("{:?}", self.behavior).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_already_sane() {
        let config = AppConfig::default();
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn test_mutation_rate_clamped() {
        let config = SimulationConfig {
            mutation_rate: 1.5,
            ..Default::default()
        };
        assert_eq!(config.sanitized().mutation_rate, 1.0);
    }

    #[test]
    fn test_non_finite_falls_back_to_default() {
        let config = SimulationConfig {
            energy_decay_rate: f64::NAN,
            world_size: -3.0,
            ..Default::default()
        };
        let clean = config.sanitized();
        assert_eq!(clean.energy_decay_rate, 0.01);
        assert_eq!(clean.world_size, MIN_WORLD_SIZE);
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [simulation]
            max_prey = 60
            pairing = "nearest"

            [behavior]
            hunt_range = 50.0
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.max_prey, 60);
        assert_eq!(config.simulation.max_predators, 15);
        assert_eq!(config.simulation.pairing, PairingStrategy::Nearest);
        assert_eq!(config.behavior.hunt_range, 30.0);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = AppConfig::from_toml("[simulation\nmax_prey = ");
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn test_config_update_merges_and_clamps() {
        let base = SimulationConfig::default();
        let update = ConfigUpdate {
            max_predators: Some(4),
            mutation_rate: Some(-0.5),
            ..Default::default()
        };
        let merged = update.apply_to(&base);
        assert_eq!(merged.max_predators, 4);
        assert_eq!(merged.mutation_rate, 0.0);
        assert_eq!(merged.max_prey, base.max_prey);
    }

    #[test]
    fn test_boundary() {
        let config = SimulationConfig::default();
        assert_eq!(config.boundary(2.0), 18.0);
    }

    #[test]
    fn test_fingerprint_consistency() {
        assert_eq!(
            AppConfig::default().fingerprint(),
            AppConfig::default().fingerprint()
        );
    }
}
