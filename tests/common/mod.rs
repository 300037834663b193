pub mod macros;

use evolife_lib::model::config::SimulationConfig;
use evolife_lib::model::lifecycle;
use evolife_lib::model::params::BehaviorParams;
use evolife_lib::model::state::{Creature, Food, Species, Traits, Vec3};
use evolife_lib::Simulation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Frame delta that advances exactly one sim unit at speed 1.
#[allow(dead_code)]
pub const ONE_SIM_UNIT: f64 = 0.001;

/// Middle-of-the-road traits; energy well above the reproduction threshold.
#[allow(dead_code)]
pub fn standard_traits() -> Traits {
    Traits {
        speed: 1.0,
        size: 1.5,
        energy: 250.0,
        aggressiveness: 0.8,
        fear_level: 0.5,
        hunger_threshold: 50.0,
        reproduction_threshold: 150.0,
    }
}

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: SimulationConfig,
    params: BehaviorParams,
    creatures: Vec<Creature>,
    food: Vec<Food>,
    rng: ChaCha8Rng,
}

#[allow(dead_code)]
impl SimulationBuilder {
    /// An empty, seeded world: `start` will not repopulate it once a
    /// creature has been added.
    pub fn new() -> Self {
        Self {
            config: SimulationConfig {
                seed: Some(42),
                ..Default::default()
            },
            params: BehaviorParams::default(),
            creatures: Vec::new(),
            food: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(0xE7011FE),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimulationConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_params<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut BehaviorParams),
    {
        modifier(&mut self.params);
        self
    }

    pub fn with_creature(self, species: Species, x: f64, z: f64) -> Self {
        self.with_creature_modified(species, x, z, |_| {})
    }

    pub fn with_creature_modified<F>(
        mut self,
        species: Species,
        x: f64,
        z: f64,
        modifier: F,
    ) -> Self
    where
        F: FnOnce(&mut Creature),
    {
        let traits = standard_traits();
        let mut creature = lifecycle::create_creature_with_rng(
            species,
            Vec3::new(x, traits.size / 2.0, z),
            traits,
            1,
            0.0,
            &mut self.rng,
        );
        modifier(&mut creature);
        self.creatures.push(creature);
        self
    }

    pub fn with_food(mut self, x: f64, z: f64, energy: f64) -> Self {
        self.food.push(Food {
            id: Uuid::new_v4(),
            position: Vec3::new(x, 0.2, z),
            energy,
            consumed: false,
        });
        self
    }

    pub fn build(self) -> Simulation {
        let mut sim = Simulation::new(self.config, self.params);
        for c in self.creatures {
            sim.insert_creature(c);
        }
        for f in self.food {
            sim.insert_food(f);
        }
        sim
    }

    /// Builds and starts the simulation.
    pub fn running(self) -> Simulation {
        let mut sim = self.build();
        sim.start();
        sim
    }
}

#[allow(dead_code)]
pub fn find(sim: &Simulation, id: Uuid) -> Option<&Creature> {
    sim.creatures().iter().find(|c| c.id == id)
}
