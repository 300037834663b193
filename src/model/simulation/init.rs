use super::{initial_stats, Simulation};
use crate::model::config::SimulationConfig;
use crate::model::lifecycle::{create_food_with_rng, create_founder_with_rng};
use crate::model::params::BehaviorParams;
use evolife_core::Metrics;
use evolife_data::{Creature, Food, RunState, Species};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl Simulation {
    /// Creates a stopped simulation with an empty world.
    ///
    /// Without a configured seed one is drawn from OS entropy and logged so
    /// the run can be replayed.
    pub fn new(config: SimulationConfig, params: BehaviorParams) -> Self {
        let config = config.sanitized();
        let params = params.sanitized();
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        if config.seed.is_none() {
            tracing::info!(seed, "No seed configured, drew one from entropy");
        }

        Self {
            config,
            params,
            creatures: Vec::new(),
            food: Vec::new(),
            run_state: RunState::Stopped,
            time: 0.0,
            generation: 1,
            speed: 1.0,
            stats: initial_stats(),
            metrics: Metrics::default(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces both populations with founders and a full food supply.
    ///
    /// Half of each species cap (rounded down) is spawned, all in generation 1.
    pub fn initialize_population(&mut self) {
        let predators = self.config.max_predators / 2;
        let prey = self.config.max_prey / 2;
        let world_size = self.config.world_size;

        self.creatures.clear();
        self.creatures.reserve(predators + prey);
        for _ in 0..predators {
            let c = create_founder_with_rng(Species::Predator, world_size, &mut self.rng);
            self.creatures.push(c);
        }
        for _ in 0..prey {
            let c = create_founder_with_rng(Species::Prey, world_size, &mut self.rng);
            self.creatures.push(c);
        }

        self.food = (0..self.config.max_food)
            .map(|_| create_food_with_rng(world_size, &mut self.rng))
            .collect();

        tracing::info!(
            predators,
            prey,
            food = self.food.len(),
            "Population initialized"
        );
    }

    /// Adds a hand-built creature, e.g. to stage a scenario before `start`.
    pub fn insert_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    pub fn insert_food(&mut self, food: Food) {
        self.food.push(food);
    }
}
