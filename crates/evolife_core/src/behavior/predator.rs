//! Predator decisions: mate, hunt, or wander.

use super::{has_mate_nearby, nearest, wander, BehaviorContext, Effect};
use evolife_data::{Creature, CreatureState, Species};
use rand::Rng;

pub(crate) fn decide<R: Rng>(
    me: &mut Creature,
    creatures: &[Creature],
    ctx: &mut BehaviorContext<'_, R>,
) -> Effect {
    let params = ctx.params;

    if me.is_ready_to_mate() && has_mate_nearby(me, creatures, params.predator_mating_range) {
        me.state = CreatureState::Reproducing;
        return Effect::None;
    }

    let closest_prey = nearest(
        &me.position,
        creatures,
        |c| c.position,
        |c| c.species == Species::Prey && c.is_alive(),
    )
    .filter(|&(_, distance)| distance < params.hunt_range);

    if let Some((victim, distance)) = closest_prey {
        let hungry = me.energy < me.traits.hunger_threshold;
        let eager = hungry
            || ctx.rng.gen::<f64>() < me.traits.aggressiveness * params.aggression_multiplier;
        if eager {
            me.state = CreatureState::Hunting;
            let prey = &creatures[victim];
            me.velocity = (prey.position - me.position).normalized() * me.traits.speed;

            if distance < me.traits.size {
                me.energy += prey.energy * params.energy_gain_from_prey;
                me.state = CreatureState::Wandering;
                return Effect::Kill { victim };
            }
            return Effect::None;
        }
    }

    wander(me, params, ctx.rng);
    Effect::None
}
