//! Population statistics, recomputed at the end of every tick.

use evolife_data::{
    AverageTraits, Creature, Food, HistorySample, PopulationCounts, Rates, SimulationStats,
    Species, TickEvents, Traits,
};

/// Simulated seconds of events that feed [`Rates`].
pub const RATE_WINDOW_SECONDS: f64 = 10.0;

pub struct StatsContext<'a> {
    pub stats: &'a mut SimulationStats,
    pub creatures: &'a [Creature],
    pub food: &'a [Food],
    /// Elapsed simulated seconds.
    pub time: f64,
    pub generation: u32,
    /// Births, deaths and food eaten during this tick.
    pub events: TickEvents,
    pub history_interval: f64,
    pub history_capacity: usize,
}

/// Mean trait vector of living members of `species`, `None` if there are none.
#[must_use]
pub fn average_traits(creatures: &[Creature], species: Species) -> Option<Traits> {
    let mut sum = Traits {
        speed: 0.0,
        size: 0.0,
        energy: 0.0,
        aggressiveness: 0.0,
        fear_level: 0.0,
        hunger_threshold: 0.0,
        reproduction_threshold: 0.0,
    };
    let mut n = 0usize;
    for c in creatures.iter().filter(|c| c.species == species && c.is_alive()) {
        let t = &c.traits;
        sum.speed += t.speed;
        sum.size += t.size;
        sum.energy += t.energy;
        sum.aggressiveness += t.aggressiveness;
        sum.fear_level += t.fear_level;
        sum.hunger_threshold += t.hunger_threshold;
        sum.reproduction_threshold += t.reproduction_threshold;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    let n = n as f64;
    Some(Traits {
        speed: sum.speed / n,
        size: sum.size / n,
        energy: sum.energy / n,
        aggressiveness: sum.aggressiveness / n,
        fear_level: sum.fear_level / n,
        hunger_threshold: sum.hunger_threshold / n,
        reproduction_threshold: sum.reproduction_threshold / n,
    })
}

pub fn update_stats(ctx: StatsContext) {
    let stats = ctx.stats;
    stats.total_time = ctx.time;
    stats.generation = ctx.generation;

    let count = |species: Species| {
        ctx.creatures
            .iter()
            .filter(|c| c.species == species && c.is_alive())
            .count()
    };
    stats.populations = PopulationCounts {
        predators: count(Species::Predator),
        prey: count(Species::Prey),
        food: ctx.food.iter().filter(|f| f.is_available()).count(),
    };

    let previous = stats.average_traits;
    stats.average_traits = AverageTraits {
        predator: average_traits(ctx.creatures, Species::Predator).unwrap_or(previous.predator),
        prey: average_traits(ctx.creatures, Species::Prey).unwrap_or(previous.prey),
    };

    update_rates(stats, ctx.time, ctx.events);
    record_history(stats, ctx.history_interval, ctx.history_capacity);
}

/// Slides the event window forward to `time` and recomputes per-second rates.
fn update_rates(stats: &mut SimulationStats, time: f64, events: TickEvents) {
    stats.recent_events.push_back((time, events));
    while let Some(&(t, _)) = stats.recent_events.front() {
        if t >= time - RATE_WINDOW_SECONDS {
            break;
        }
        stats.recent_events.pop_front();
    }

    let span = time.min(RATE_WINDOW_SECONDS);
    if span <= 0.0 {
        stats.rates = Rates::default();
        return;
    }
    let mut totals = TickEvents::default();
    for (_, e) in &stats.recent_events {
        totals.absorb(*e);
    }
    stats.rates = Rates {
        birth_rate: totals.births as f64 / span,
        death_rate: totals.deaths as f64 / span,
        food_consumption: totals.food_eaten as f64 / span,
    };
}

fn record_history(stats: &mut SimulationStats, interval: f64, capacity: usize) {
    let time = stats.total_time;
    let due = match stats.history.back() {
        None => true,
        Some(last) => time > last.time && time - last.time >= interval,
    };
    if !due {
        return;
    }

    let avg = &stats.average_traits;
    stats.history.push_back(HistorySample {
        time,
        predator_count: stats.populations.predators,
        prey_count: stats.populations.prey,
        avg_predator_speed: avg.predator.speed,
        avg_prey_speed: avg.prey.speed,
        avg_predator_size: avg.predator.size,
        avg_prey_size: avg.prey.size,
    });
    while stats.history.len() > capacity {
        stats.history.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::tests::creature;
    use crate::genetics::TraitRanges;
    use evolife_data::CreatureState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fresh_stats() -> SimulationStats {
        SimulationStats::new(AverageTraits {
            predator: TraitRanges::for_species(Species::Predator).midpoint(),
            prey: TraitRanges::for_species(Species::Prey).midpoint(),
        })
    }

    fn tick(stats: &mut SimulationStats, creatures: &[Creature], time: f64, events: TickEvents) {
        update_stats(StatsContext {
            stats,
            creatures,
            food: &[],
            time,
            generation: 1,
            events,
            history_interval: 2.0,
            history_capacity: 100,
        });
    }

    #[test]
    fn test_empty_species_keeps_previous_average() {
        let mut rng = ChaCha8Rng::seed_from_u64(70);
        let mut stats = fresh_stats();
        let before = stats.average_traits.predator;
        let mut prey = creature(Species::Prey, 0.0, 0.0, &mut rng);
        prey.traits.speed = 2.0;
        let mut other = creature(Species::Prey, 1.0, 0.0, &mut rng);
        other.traits.speed = 1.0;
        let mut corpse = creature(Species::Prey, 2.0, 0.0, &mut rng);
        corpse.state = CreatureState::Dead;
        corpse.traits.speed = 100.0;

        tick(&mut stats, &[prey, other, corpse], 0.1, TickEvents::default());

        assert_eq!(stats.average_traits.predator, before);
        assert!((stats.average_traits.prey.speed - 1.5).abs() < 1e-12);
        assert_eq!(stats.populations.prey, 2);
        assert_eq!(stats.populations.predators, 0);
        assert!(!stats.average_traits.predator.speed.is_nan());
    }

    #[test]
    fn test_history_interval_and_capacity() {
        let mut stats = fresh_stats();
        for i in 0..1000 {
            tick(&mut stats, &[], i as f64 * 0.5, TickEvents::default());
        }
        assert_eq!(stats.history.len(), 100);
        let times: Vec<f64> = stats.history.iter().map(|h| h.time).collect();
        assert!(times.windows(2).all(|w| w[1] > w[0]));
        assert!(times.windows(2).all(|w| w[1] - w[0] >= 2.0));
        assert_eq!(*times.last().unwrap_or(&0.0), 498.0);
    }

    #[test]
    fn test_rates_over_window() {
        let mut stats = fresh_stats();
        let event = TickEvents {
            births: 1,
            deaths: 2,
            food_eaten: 0,
        };
        for i in 1..=20 {
            tick(&mut stats, &[], i as f64, event);
        }
        // Window covers t in [10, 20]: eleven samples over ten seconds.
        assert!((stats.rates.birth_rate - 1.1).abs() < 1e-9);
        assert!((stats.rates.death_rate - 2.2).abs() < 1e-9);
        assert_eq!(stats.rates.food_consumption, 0.0);
    }

    #[test]
    fn test_rates_zero_at_time_zero() {
        let mut stats = fresh_stats();
        tick(&mut stats, &[], 0.0, TickEvents { births: 3, deaths: 0, food_eaten: 0 });
        assert_eq!(stats.rates, Rates::default());
    }
}
