//! # EvoLife Core
//!
//! Deterministic building blocks of the EvoLife predator/prey simulation.
//!
//! - Trait genetics: random founders, crossover, mutation, tournament selection
//! - Per-creature finite-state behavior for predators and prey
//! - Engine passes: reproduction, food spawning, cleanup, statistics
//! - Typed configuration, tuning parameters and errors
//! - Metrics collection and structured logging
//!
//! Every stochastic function takes the caller's RNG, so a seeded
//! `ChaCha8Rng` replays a run exactly.
//!
//! ## Example
//!
//! ```
//! use evolife_core::genetics::{crossover_with_rng, generate_random_traits_with_rng};
//! use evolife_data::Species;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let a = generate_random_traits_with_rng(Species::Prey, &mut rng);
//! let b = generate_random_traits_with_rng(Species::Prey, &mut rng);
//! let child = crossover_with_rng(&a, &b, &mut rng);
//! assert!(child.speed == a.speed || child.speed == b.speed);
//! ```

/// Predator and prey decision logic, movement and bounds
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Error types
pub mod error;
/// Trait genetics (crossover, mutation, selection)
pub mod genetics;
/// Creature and food construction
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Tunable behavior constants
pub mod params;
/// Engine passes that run after behavior each tick
pub mod systems;

pub use behavior::{behavior_pass, update_creature, BehaviorContext, Interaction};
pub use config::{AppConfig, ConfigUpdate, PairingStrategy, SimulationConfig};
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use params::BehaviorParams;
