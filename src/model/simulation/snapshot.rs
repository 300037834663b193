use super::Simulation;
use evolife_data::{Creature, Food, RunState, SimulationStats};
use serde::{Deserialize, Serialize};

/// Read-only view of the engine for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub run_state: RunState,
    /// Sim units.
    pub time: f64,
    pub time_seconds: f64,
    pub generation: u32,
    pub speed: f64,
    pub creatures: Vec<Creature>,
    pub food: Vec<Food>,
    pub stats: SimulationStats,
}

impl SimulationSnapshot {
    pub fn to_json(&self) -> evolife_core::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Simulation {
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            run_state: self.run_state,
            time: self.time,
            time_seconds: self.time_seconds(),
            generation: self.generation,
            speed: self.speed,
            creatures: self.creatures.clone(),
            food: self.food.clone(),
            stats: self.stats.clone(),
        }
    }
}
