//! Per-creature finite-state behavior.
//!
//! [`update_creature`] is called once per living creature per tick, in list
//! order. Kills and grazing take effect immediately, so a creature eaten
//! earlier in the pass is never a target or mate for those that follow.
//!
//! Each species has its own decision function in [`predator`] and [`prey`].
//! Decisions read the shared lists immutably against a working copy of the
//! acting creature; the copy and any side effect are written back afterwards.

pub mod movement;
pub mod predator;
pub mod prey;

use crate::config::SimulationConfig;
use crate::params::BehaviorParams;
use evolife_data::{Creature, CreatureState, Food, Species, Vec3};
use rand::Rng;
use uuid::Uuid;

/// Everything a decision needs besides the populations themselves.
pub struct BehaviorContext<'a, R: Rng> {
    pub params: &'a BehaviorParams,
    /// Largest |x| or |z| a creature may occupy.
    pub boundary: f64,
    pub energy_decay_rate: f64,
    pub rng: &'a mut R,
}

impl<'a, R: Rng> BehaviorContext<'a, R> {
    pub fn new(config: &SimulationConfig, params: &'a BehaviorParams, rng: &'a mut R) -> Self {
        Self {
            params,
            boundary: config.boundary(params.boundary_margin),
            energy_decay_rate: config.energy_decay_rate,
            rng,
        }
    }
}

/// Side effect a decision has on another entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Effect {
    None,
    Kill { victim: usize },
    Consume { food: usize },
}

/// What happened to or because of a creature during its update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Starved {
        id: Uuid,
    },
    Killed {
        predator: Uuid,
        prey: Uuid,
        energy_gained: f64,
    },
    Ate {
        prey: Uuid,
        food: Uuid,
        energy_gained: f64,
    },
}

/// Advances the creature at `index` by `delta` sim units.
///
/// The caller must not pass a dead creature.
pub fn update_creature<R: Rng>(
    index: usize,
    creatures: &mut [Creature],
    food: &mut [Food],
    delta: f64,
    ctx: &mut BehaviorContext<'_, R>,
) -> Option<Interaction> {
    let mut me = creatures[index].clone();

    me.energy -= ctx.energy_decay_rate * delta;
    me.age += delta;
    if me.energy <= 0.0 {
        me.state = CreatureState::Dead;
        let id = me.id;
        creatures[index] = me;
        return Some(Interaction::Starved { id });
    }

    let energy_before = me.energy;
    let effect = match me.species {
        Species::Predator => predator::decide(&mut me, creatures, ctx),
        Species::Prey => prey::decide(&mut me, creatures, food, ctx),
    };

    movement::apply_movement(&mut me, delta, ctx.params.friction);
    movement::keep_in_bounds(&mut me, ctx.boundary);

    let energy_gained = me.energy - energy_before;
    let actor = me.id;
    creatures[index] = me;

    match effect {
        Effect::None => None,
        Effect::Kill { victim } => {
            creatures[victim].state = CreatureState::Dead;
            Some(Interaction::Killed {
                predator: actor,
                prey: creatures[victim].id,
                energy_gained,
            })
        }
        Effect::Consume { food: idx } => {
            food[idx].consumed = true;
            Some(Interaction::Ate {
                prey: actor,
                food: food[idx].id,
                energy_gained,
            })
        }
    }
}

/// Runs [`update_creature`] over every creature still alive when its turn comes.
pub fn behavior_pass<R: Rng>(
    creatures: &mut [Creature],
    food: &mut [Food],
    delta: f64,
    ctx: &mut BehaviorContext<'_, R>,
) -> Vec<Interaction> {
    let mut interactions = Vec::new();
    for index in 0..creatures.len() {
        if !creatures[index].is_alive() {
            continue;
        }
        if let Some(interaction) = update_creature(index, creatures, food, delta, ctx) {
            interactions.push(interaction);
        }
    }
    interactions
}

/// Whether another live, same-species creature within `range` is also ready to mate.
pub(crate) fn has_mate_nearby(me: &Creature, creatures: &[Creature], range: f64) -> bool {
    creatures.iter().any(|c| {
        c.species == me.species
            && c.id != me.id
            && c.is_alive()
            && c.is_ready_to_mate()
            && me.distance_to(c) < range
    })
}

/// Index and distance of the closest element accepted by `filter`, first wins ties.
pub(crate) fn nearest<T>(
    origin: &Vec3,
    items: &[T],
    position: impl Fn(&T) -> Vec3,
    filter: impl Fn(&T) -> bool,
) -> Option<(usize, f64)> {
    items
        .iter()
        .enumerate()
        .filter(|&(_, item)| filter(item))
        .map(|(i, item)| (i, origin.distance_to(&position(item))))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// Drift: keep the current heading, occasionally pick a new horizontal one.
pub(crate) fn wander<R: Rng>(me: &mut Creature, params: &BehaviorParams, rng: &mut R) {
    me.state = CreatureState::Wandering;
    if rng.gen::<f64>() < params.wander_turn_chance {
        let heading = Vec3::new(rng.gen_range(-1.0..1.0), 0.0, rng.gen_range(-1.0..1.0));
        me.velocity = heading.normalized() * (me.traits.speed * params.wander_speed_factor);
    }
}
