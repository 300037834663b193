use evolife_data::Creature;
use rand::Rng;

const TOURNAMENT_SIZE: usize = 3;

/// Survival-weighted score: age, stored energy, speed and (capped) size.
#[must_use]
pub fn calculate_fitness(creature: &Creature) -> f64 {
    let fitness = creature.age * 10.0
        + creature.energy * 0.5
        + creature.traits.speed * 20.0
        + creature.traits.size.min(1.5) * 15.0;
    fitness.max(0.0)
}

/// Tournament selection: `min(3, len)` draws with replacement, fittest wins.
/// Ties keep the earlier draw.
pub fn select_parent_with_rng<'a, R: Rng>(
    population: &'a [Creature],
    rng: &mut R,
) -> Option<&'a Creature> {
    if population.is_empty() {
        return None;
    }
    (0..TOURNAMENT_SIZE.min(population.len()))
        .map(|_| &population[rng.gen_range(0..population.len())])
        .reduce(|best, c| {
            if calculate_fitness(c) > calculate_fitness(best) {
                c
            } else {
                best
            }
        })
}

/// Two independent tournaments.
pub fn select_parents_with_rng<'a, R: Rng>(
    population: &'a [Creature],
    rng: &mut R,
) -> Option<(&'a Creature, &'a Creature)> {
    let first = select_parent_with_rng(population, rng)?;
    let second = select_parent_with_rng(population, rng)?;
    Some((first, second))
}
