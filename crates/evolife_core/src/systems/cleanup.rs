use evolife_data::{Creature, Food, TickEvents};

/// Drops dead creatures and consumed food, then clears the reproduced flag
/// on survivors older than `reproduction_cooldown` sim units.
///
/// The returned events carry the death and consumption counts.
pub fn cleanup(
    creatures: &mut Vec<Creature>,
    food: &mut Vec<Food>,
    reproduction_cooldown: f64,
) -> TickEvents {
    let creatures_before = creatures.len();
    creatures.retain(Creature::is_alive);
    let food_before = food.len();
    food.retain(Food::is_available);

    for c in creatures.iter_mut() {
        if c.reproduced && c.age > reproduction_cooldown {
            c.reproduced = false;
        }
    }

    TickEvents {
        births: 0,
        deaths: creatures_before - creatures.len(),
        food_eaten: food_before - food.len(),
    }
}
