use evolife_data::Traits;
use rand::Rng;

/// Uniform crossover: every field comes from one parent on a fair coin flip.
pub fn crossover_with_rng<R: Rng>(parent1: &Traits, parent2: &Traits, rng: &mut R) -> Traits {
    let mut pick = |a: f64, b: f64| if rng.gen_bool(0.5) { a } else { b };
    Traits {
        speed: pick(parent1.speed, parent2.speed),
        size: pick(parent1.size, parent2.size),
        energy: pick(parent1.energy, parent2.energy),
        aggressiveness: pick(parent1.aggressiveness, parent2.aggressiveness),
        fear_level: pick(parent1.fear_level, parent2.fear_level),
        hunger_threshold: pick(parent1.hunger_threshold, parent2.hunger_threshold),
        reproduction_threshold: pick(
            parent1.reproduction_threshold,
            parent2.reproduction_threshold,
        ),
    }
}
