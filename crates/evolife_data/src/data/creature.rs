use super::vector::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The two populations sharing the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Predator,
    Prey,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Predator, Species::Prey];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Predator => f.write_str("predator"),
            Species::Prey => f.write_str("prey"),
        }
    }
}

/// Behavioral state of a creature. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatureState {
    #[default]
    Wandering,
    Hunting,
    Fleeing,
    Eating,
    Reproducing,
    Dead,
}

/// Genetically inherited parameters of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    /// Cruising speed in world units per sim unit.
    pub speed: f64,
    /// Body size; doubles as attack reach for predators.
    pub size: f64,
    /// Energy reservoir at birth.
    pub energy: f64,
    /// Conceptually in [0, 1].
    pub aggressiveness: f64,
    /// Conceptually in [0, 1].
    pub fear_level: f64,
    pub hunger_threshold: f64,
    pub reproduction_threshold: f64,
}

/// A single predator or prey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: Uuid,
    pub species: Species,
    pub position: Vec3,
    pub velocity: Vec3,
    pub traits: Traits,
    /// Current energy reservoir.
    pub energy: f64,
    /// Elapsed sim time since birth.
    pub age: f64,
    pub generation: u32,
    /// Set after mating; cleared once the creature is past the cooldown age.
    pub reproduced: bool,
    pub state: CreatureState,
    pub last_reproduction: f64,
}

impl Creature {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state != CreatureState::Dead
    }

    #[must_use]
    pub fn distance_to(&self, other: &Creature) -> f64 {
        self.position.distance_to(&other.position)
    }

    /// True when energy is above the reproduction threshold and the creature
    /// has not mated recently.
    #[must_use]
    pub fn is_ready_to_mate(&self) -> bool {
        self.energy > self.traits.reproduction_threshold && !self.reproduced
    }
}
