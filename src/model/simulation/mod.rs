use crate::model::config::{AppConfig, SimulationConfig};
use crate::model::genetics::TraitRanges;
use crate::model::params::BehaviorParams;
use evolife_core::Metrics;
use evolife_data::{AverageTraits, Creature, Food, RunState, SimulationStats, Species};
use rand_chacha::ChaCha8Rng;

pub mod control;
pub mod init;
pub mod snapshot;
pub mod update;

pub use snapshot::SimulationSnapshot;

/// Starting averages before any creature has been counted.
pub(crate) fn initial_stats() -> SimulationStats {
    SimulationStats::new(AverageTraits {
        predator: TraitRanges::for_species(Species::Predator).midpoint(),
        prey: TraitRanges::for_species(Species::Prey).midpoint(),
    })
}

/// The simulation engine: populations, run state and the tick loop.
///
/// Creatures and food are owned exclusively by the engine. Callers read them
/// through accessors or a [`SimulationSnapshot`] and steer the run through
/// the control methods.
pub struct Simulation {
    pub(crate) config: SimulationConfig,
    pub(crate) params: BehaviorParams,
    pub(crate) creatures: Vec<Creature>,
    pub(crate) food: Vec<Food>,
    pub(crate) run_state: RunState,
    /// Elapsed sim units.
    pub(crate) time: f64,
    pub(crate) generation: u32,
    pub(crate) speed: f64,
    pub(crate) stats: SimulationStats,
    pub(crate) metrics: Metrics,
    pub(crate) seed: u64,
    pub(crate) rng: ChaCha8Rng,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default(), BehaviorParams::default())
    }
}

impl Simulation {
    /// Builds an engine from a loaded `config.toml`.
    pub fn from_app_config(config: &AppConfig) -> Self {
        let mut sim = Self::new(config.simulation.clone(), config.behavior);
        sim.metrics = Metrics::new(config.logging.report_interval);
        sim
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Elapsed time in sim units.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Elapsed time in simulated seconds.
    pub fn time_seconds(&self) -> f64 {
        self.time / self.config.time_scale
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn behavior_params(&self) -> &BehaviorParams {
        &self.params
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Seed the RNG was created from; replaying it reproduces the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Largest |x| or |z| any creature may occupy.
    pub fn boundary(&self) -> f64 {
        self.config.boundary(self.params.boundary_margin)
    }

    pub fn count(&self, species: Species) -> usize {
        self.creatures
            .iter()
            .filter(|c| c.species == species && c.is_alive())
            .count()
    }
}
