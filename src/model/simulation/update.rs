use super::Simulation;
use crate::model::behavior::{behavior_pass, BehaviorContext, Interaction};
use evolife_core::systems::cleanup::cleanup;
use evolife_core::systems::reproduction::{reproduction_pass, ReproductionContext};
use evolife_core::systems::spawn::spawn_food;
use evolife_core::systems::stats::{update_stats, StatsContext};
use evolife_data::RunState;
use std::time::Instant;

impl Simulation {
    /// Advances the simulation by one frame.
    ///
    /// Does nothing unless running. `delta` is wall-clock seconds; it is
    /// scaled by the speed multiplier and `time_scale` into sim units.
    ///
    /// Passes run in a fixed order:
    /// - behavior for every creature alive when its turn comes
    /// - reproduction of paired creatures
    /// - food spawning, paced by the unscaled `delta`
    /// - cleanup of dead creatures and eaten food
    /// - statistics
    pub fn update(&mut self, delta: f64) {
        if self.run_state != RunState::Running {
            return;
        }
        if !delta.is_finite() || delta < 0.0 {
            tracing::warn!(delta, "Ignoring invalid frame delta");
            return;
        }

        let tick_start = Instant::now();
        let scaled = delta * self.speed * self.config.time_scale;
        self.time += scaled;

        let interactions = {
            let mut ctx = BehaviorContext::new(&self.config, &self.params, &mut self.rng);
            behavior_pass(&mut self.creatures, &mut self.food, scaled, &mut ctx)
        };
        for interaction in &interactions {
            match interaction {
                Interaction::Starved { id } => tracing::debug!(%id, "Creature starved"),
                Interaction::Killed {
                    predator,
                    prey,
                    energy_gained,
                } => tracing::debug!(%predator, %prey, energy_gained, "Prey killed"),
                Interaction::Ate {
                    prey,
                    food,
                    energy_gained,
                } => tracing::debug!(%prey, %food, energy_gained, "Food eaten"),
            }
        }

        let boundary = self.boundary();
        let outcome = {
            let mut ctx = ReproductionContext {
                config: &self.config,
                boundary,
                time: self.time,
                generation: self.generation,
                rng: &mut self.rng,
            };
            reproduction_pass(&mut self.creatures, &mut ctx)
        };
        self.generation = self.generation.max(outcome.max_generation);

        spawn_food(&mut self.food, &self.config, delta, &mut self.rng);

        let mut events = cleanup(
            &mut self.creatures,
            &mut self.food,
            self.config.reproduction_cooldown,
        );
        events.births = outcome.births;

        let time_seconds = self.time_seconds();
        update_stats(StatsContext {
            stats: &mut self.stats,
            creatures: &self.creatures,
            food: &self.food,
            time: time_seconds,
            generation: self.generation,
            events,
            history_interval: self.config.history_interval,
            history_capacity: self.config.history_capacity,
        });

        self.metrics.record_tick(
            tick_start.elapsed(),
            self.creatures.len(),
            self.stats.populations.food,
            events.births,
            events.deaths,
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::model::config::SimulationConfig;
    use crate::model::params::BehaviorParams;
    use crate::Simulation;
    use evolife_data::RunState;

    fn seeded(seed: u64) -> Simulation {
        Simulation::new(
            SimulationConfig {
                seed: Some(seed),
                ..Default::default()
            },
            BehaviorParams::default(),
        )
    }

    #[test]
    fn test_stopped_and_paused_do_not_advance() {
        let mut sim = seeded(1);
        sim.update(1.0 / 60.0);
        assert_eq!(sim.time(), 0.0);

        sim.start();
        sim.pause();
        sim.update(1.0 / 60.0);
        assert_eq!(sim.time(), 0.0);
        assert_eq!(sim.run_state(), RunState::Paused);
    }

    #[test]
    fn test_time_scaled_by_speed() {
        let mut sim = seeded(2);
        sim.start();
        sim.set_speed(2.0);
        sim.update(0.01);
        assert!((sim.time() - 20.0).abs() < 1e-9);
        assert!((sim.time_seconds() - 0.02).abs() < 1e-12);
        assert!((sim.stats().total_time - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_delta_ignored() {
        let mut sim = seeded(3);
        sim.start();
        sim.update(f64::NAN);
        sim.update(-1.0);
        assert_eq!(sim.time(), 0.0);
    }

    #[test]
    fn test_generation_never_decreases() {
        let mut sim = seeded(4);
        sim.start();
        let mut last = sim.generation();
        for _ in 0..300 {
            sim.update(1.0 / 30.0);
            assert!(sim.generation() >= last);
            last = sim.generation();
        }
    }
}
