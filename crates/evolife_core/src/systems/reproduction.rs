//! Offspring from pairs of creatures left in the reproducing state.

use crate::config::{PairingStrategy, SimulationConfig};
use crate::genetics::{crossover_with_rng, mutate_with_rng};
use crate::lifecycle::create_creature_with_rng;
use evolife_data::{Creature, CreatureState, Species, Vec3};
use rand::Rng;

pub struct ReproductionContext<'a, R: Rng> {
    pub config: &'a SimulationConfig,
    /// Largest |x| or |z| a newborn may occupy.
    pub boundary: f64,
    /// Engine time in sim units.
    pub time: f64,
    /// Engine generation; children are one past it.
    pub generation: u32,
    pub rng: &'a mut R,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReproductionOutcome {
    pub births: usize,
    /// Highest generation among this pass's children, zero if none.
    pub max_generation: u32,
}

/// Fraction of the child's trait energy it is born with.
fn birth_energy_share(species: Species) -> f64 {
    match species {
        Species::Predator => 0.7,
        Species::Prey => 0.8,
    }
}

/// Fraction of current energy each parent pays.
fn parent_energy_cost(species: Species) -> f64 {
    match species {
        Species::Predator => 0.3,
        Species::Prey => 0.2,
    }
}

/// Half-width of the square around parent one where the child appears.
fn birth_jitter(species: Species) -> f64 {
    match species {
        Species::Predator => 2.0,
        Species::Prey => 1.5,
    }
}

/// Pairs up `candidates` (indices into `creatures`, in list order).
/// An odd creature out is left unpaired.
#[must_use]
pub fn pair_candidates(
    creatures: &[Creature],
    candidates: &[usize],
    strategy: PairingStrategy,
) -> Vec<(usize, usize)> {
    match strategy {
        PairingStrategy::Sequential => candidates
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect(),
        PairingStrategy::Nearest => {
            let mut taken = vec![false; candidates.len()];
            let mut pairs = Vec::with_capacity(candidates.len() / 2);
            for i in 0..candidates.len() {
                if taken[i] {
                    continue;
                }
                let me = &creatures[candidates[i]];
                let partner = (i + 1..candidates.len())
                    .filter(|&j| !taken[j])
                    .map(|j| (j, me.distance_to(&creatures[candidates[j]])))
                    .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
                if let Some((j, _)) = partner {
                    taken[i] = true;
                    taken[j] = true;
                    pairs.push((candidates[i], candidates[j]));
                }
            }
            pairs
        }
    }
}

/// Crossover plus mutation, placed near `first`.
pub fn breed<R: Rng>(
    first: &Creature,
    second: &Creature,
    ctx: &mut ReproductionContext<'_, R>,
) -> Creature {
    let species = first.species;
    let traits = mutate_with_rng(
        &crossover_with_rng(&first.traits, &second.traits, ctx.rng),
        ctx.config.mutation_rate,
        ctx.rng,
    );

    let jitter = birth_jitter(species);
    let offset = Vec3::new(
        ctx.rng.gen_range(-jitter..=jitter),
        0.0,
        ctx.rng.gen_range(-jitter..=jitter),
    );
    let mut position = first.position + offset;
    position.x = position.x.clamp(-ctx.boundary, ctx.boundary);
    position.z = position.z.clamp(-ctx.boundary, ctx.boundary);
    position.y = traits.size / 2.0;

    let mut child = create_creature_with_rng(
        species,
        position,
        traits,
        ctx.generation + 1,
        ctx.time,
        ctx.rng,
    );
    child.energy = traits.energy * birth_energy_share(species);
    child
}

/// Breeds every eligible pair, species by species, and appends the children.
///
/// A pair only breeds while living members of its species plus children
/// already born in this pass are below the species cap. Pairs that miss out
/// stay in the reproducing state.
pub fn reproduction_pass<R: Rng>(
    creatures: &mut Vec<Creature>,
    ctx: &mut ReproductionContext<'_, R>,
) -> ReproductionOutcome {
    let mut children = Vec::new();

    for species in Species::ALL {
        let living = creatures
            .iter()
            .filter(|c| c.species == species && c.is_alive())
            .count();
        let candidates: Vec<usize> = creatures
            .iter()
            .enumerate()
            .filter(|(_, c)| c.species == species && c.state == CreatureState::Reproducing)
            .map(|(i, _)| i)
            .collect();

        let cap = ctx.config.cap_for(species);
        let mut born = 0;
        for (a, b) in pair_candidates(creatures, &candidates, ctx.config.pairing) {
            if living + born >= cap {
                tracing::debug!(%species, cap, "Reproduction blocked by population cap");
                break;
            }
            let child = breed(&creatures[a], &creatures[b], ctx);
            let cost = parent_energy_cost(species);
            for parent in [a, b] {
                let p = &mut creatures[parent];
                p.energy *= 1.0 - cost;
                p.reproduced = true;
                p.last_reproduction = ctx.time;
                p.state = CreatureState::Wandering;
            }
            tracing::debug!(
                %species,
                generation = child.generation,
                id = %child.id,
                "Creature born"
            );
            children.push(child);
            born += 1;
        }
    }

    let outcome = ReproductionOutcome {
        births: children.len(),
        max_generation: children.iter().map(|c| c.generation).max().unwrap_or(0),
    };
    creatures.extend(children);
    outcome
}
