use crate::config::SimulationConfig;
use crate::lifecycle::create_food_with_rng;
use evolife_data::Food;
use rand::Rng;

/// Spawn probability per wall-clock second, per unit of `food_spawn_rate`.
const SPAWN_FACTOR: f64 = 3.0;

/// Possibly adds one pellet. `delta` is the raw frame delta in seconds;
/// the speed multiplier does not apply.
///
/// The draw is taken every tick whether or not the food cap is reached so
/// the RNG stream does not depend on the food count.
pub fn spawn_food<R: Rng>(
    food: &mut Vec<Food>,
    config: &SimulationConfig,
    delta: f64,
    rng: &mut R,
) -> bool {
    let roll = rng.gen::<f64>();
    let available = food.iter().filter(|f| f.is_available()).count();
    if roll < config.food_spawn_rate * delta * SPAWN_FACTOR && available < config.max_food {
        food.push(create_food_with_rng(config.world_size, rng));
        return true;
    }
    false
}
