//! Prey decisions: mate, flee, graze, or wander.

use super::{has_mate_nearby, nearest, wander, BehaviorContext, Effect};
use evolife_data::{Creature, CreatureState, Food, Species, Vec3};
use rand::Rng;

pub(crate) fn decide<R: Rng>(
    me: &mut Creature,
    creatures: &[Creature],
    food: &[Food],
    ctx: &mut BehaviorContext<'_, R>,
) -> Effect {
    let params = ctx.params;

    if me.is_ready_to_mate() && has_mate_nearby(me, creatures, params.prey_mating_range) {
        me.state = CreatureState::Reproducing;
        return Effect::None;
    }

    let threats: Vec<Vec3> = creatures
        .iter()
        .filter(|c| {
            c.species == Species::Predator
                && c.is_alive()
                && me.distance_to(c) < params.flee_range
        })
        .map(|c| c.position)
        .collect();

    if !threats.is_empty()
        && ctx.rng.gen::<f64>() < me.traits.fear_level * params.fear_sensitivity
    {
        me.state = CreatureState::Fleeing;
        let mut centre = Vec3::ZERO;
        for p in &threats {
            centre += *p;
        }
        let centre = centre * (1.0 / threats.len() as f64);
        me.velocity = (me.position - centre).normalized()
            * (me.traits.speed * params.flee_speed_multiplier);
        return Effect::None;
    }

    if me.energy < me.traits.hunger_threshold {
        if let Some((idx, distance)) =
            nearest(&me.position, food, |f| f.position, Food::is_available)
        {
            me.state = CreatureState::Eating;
            let target = &food[idx];
            me.velocity = (target.position - me.position).normalized() * me.traits.speed;

            if distance < me.traits.size + params.eat_reach {
                me.energy += target.energy;
                me.state = CreatureState::Wandering;
                return Effect::Consume { food: idx };
            }
            return Effect::None;
        }
    }

    wander(me, params, ctx.rng);
    Effect::None
}
