use super::creature::Traits;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Run status of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub predators: usize,
    pub prey: usize,
    /// Uneaten food only.
    pub food: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageTraits {
    pub predator: Traits,
    pub prey: Traits,
}

/// Event rates per simulated second over a sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rates {
    pub birth_rate: f64,
    pub death_rate: f64,
    pub food_consumption: f64,
}

/// One point of the charting series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Simulated seconds.
    pub time: f64,
    pub predator_count: usize,
    pub prey_count: usize,
    pub avg_predator_speed: f64,
    pub avg_prey_speed: f64,
    pub avg_predator_size: f64,
    pub avg_prey_size: f64,
}

/// Per-tick counters folded into [`Rates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickEvents {
    pub births: usize,
    pub deaths: usize,
    pub food_eaten: usize,
}

impl TickEvents {
    pub fn absorb(&mut self, other: TickEvents) {
        self.births += other.births;
        self.deaths += other.deaths;
        self.food_eaten += other.food_eaten;
    }
}

/// Aggregated population statistics, recomputed every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Simulated seconds.
    pub total_time: f64,
    pub generation: u32,
    pub populations: PopulationCounts,
    pub average_traits: AverageTraits,
    pub rates: Rates,
    pub history: VecDeque<HistorySample>,
    /// Recent `(time, events)` samples backing `rates`.
    #[serde(skip)]
    pub recent_events: VecDeque<(f64, TickEvents)>,
}

impl SimulationStats {
    #[must_use]
    pub fn new(average_traits: AverageTraits) -> Self {
        Self {
            total_time: 0.0,
            generation: 1,
            populations: PopulationCounts::default(),
            average_traits,
            rates: Rates::default(),
            history: VecDeque::new(),
            recent_events: VecDeque::new(),
        }
    }
}
