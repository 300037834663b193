//! Creature and food construction.

use evolife_data::{Creature, CreatureState, Food, Species, Traits, Vec3};
use rand::Rng;
use uuid::Uuid;

/// Fraction of the world edge that founders are scattered over.
const CREATURE_SPREAD: f64 = 0.8;
/// Fraction of the world edge that food is scattered over.
const FOOD_SPREAD: f64 = 0.9;
const FOOD_HEIGHT: f64 = 0.2;

pub fn random_horizontal_position<R: Rng>(
    world_size: f64,
    spread: f64,
    y: f64,
    rng: &mut R,
) -> Vec3 {
    let half = world_size * spread / 2.0;
    Vec3::new(rng.gen_range(-half..=half), y, rng.gen_range(-half..=half))
}

/// Builds a wandering creature at full trait energy.
pub fn create_creature_with_rng<R: Rng>(
    species: Species,
    position: Vec3,
    traits: Traits,
    generation: u32,
    time: f64,
    rng: &mut R,
) -> Creature {
    Creature {
        id: Uuid::from_u128(rng.gen::<u128>()),
        species,
        position,
        velocity: Vec3::ZERO,
        traits,
        energy: traits.energy,
        age: 0.0,
        generation,
        reproduced: false,
        state: CreatureState::Wandering,
        last_reproduction: time,
    }
}

/// A founder with random traits placed somewhere in the central 80% of the world.
pub fn create_founder_with_rng<R: Rng>(species: Species, world_size: f64, rng: &mut R) -> Creature {
    let traits = crate::genetics::generate_random_traits_with_rng(species, rng);
    let position = random_horizontal_position(world_size, CREATURE_SPREAD, traits.size / 2.0, rng);
    create_creature_with_rng(species, position, traits, 1, 0.0, rng)
}

/// A fresh pellet worth 50-80 energy.
pub fn create_food_with_rng<R: Rng>(world_size: f64, rng: &mut R) -> Food {
    Food {
        id: Uuid::from_u128(rng.gen::<u128>()),
        position: random_horizontal_position(world_size, FOOD_SPREAD, FOOD_HEIGHT, rng),
        energy: rng.gen_range(50.0..80.0),
        consumed: false,
    }
}
