//! Trait genetics: random founders, crossover, mutation and selection.
//!
//! Every stochastic function takes the caller's RNG so runs replay exactly
//! from a seed.

mod crossover;
mod mutation;
mod selection;

pub use crossover::crossover_with_rng;
pub use mutation::mutate_with_rng;
pub use selection::{calculate_fitness, select_parent_with_rng, select_parents_with_rng};

use evolife_data::{Species, Traits};
use rand::Rng;
use std::ops::Range;

/// Uniform sampling ranges for founder traits of one species.
#[derive(Debug, Clone)]
pub struct TraitRanges {
    pub speed: Range<f64>,
    pub size: Range<f64>,
    pub energy: Range<f64>,
    pub aggressiveness: Range<f64>,
    pub fear_level: Range<f64>,
    pub hunger_threshold: Range<f64>,
    pub reproduction_threshold: Range<f64>,
}

impl TraitRanges {
    /// Predators are bigger, hungrier and more aggressive; prey are faster and more fearful.
    #[must_use]
    pub fn for_species(species: Species) -> Self {
        match species {
            Species::Predator => Self {
                speed: 0.8..1.2,
                size: 1.2..1.8,
                energy: 200.0..300.0,
                aggressiveness: 0.7..1.0,
                fear_level: 0.1..0.4,
                hunger_threshold: 50.0..80.0,
                reproduction_threshold: 150.0..200.0,
            },
            Species::Prey => Self {
                speed: 1.0..1.5,
                size: 0.8..1.2,
                energy: 150.0..250.0,
                aggressiveness: 0.1..0.3,
                fear_level: 0.6..1.0,
                hunger_threshold: 40.0..60.0,
                reproduction_threshold: 120.0..150.0,
            },
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Traits {
        Traits {
            speed: rng.gen_range(self.speed.clone()),
            size: rng.gen_range(self.size.clone()),
            energy: rng.gen_range(self.energy.clone()),
            aggressiveness: rng.gen_range(self.aggressiveness.clone()),
            fear_level: rng.gen_range(self.fear_level.clone()),
            hunger_threshold: rng.gen_range(self.hunger_threshold.clone()),
            reproduction_threshold: rng.gen_range(self.reproduction_threshold.clone()),
        }
    }

    /// Centre of every range; used as the starting trait averages.
    #[must_use]
    pub fn midpoint(&self) -> Traits {
        let mid = |r: &Range<f64>| (r.start + r.end) / 2.0;
        Traits {
            speed: mid(&self.speed),
            size: mid(&self.size),
            energy: mid(&self.energy),
            aggressiveness: mid(&self.aggressiveness),
            fear_level: mid(&self.fear_level),
            hunger_threshold: mid(&self.hunger_threshold),
            reproduction_threshold: mid(&self.reproduction_threshold),
        }
    }
}

pub fn generate_random_traits_with_rng<R: Rng>(species: Species, rng: &mut R) -> Traits {
    TraitRanges::for_species(species).sample(rng)
}
