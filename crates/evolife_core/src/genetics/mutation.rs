use evolife_data::Traits;
use rand::Rng;

fn scale<R: Rng>(value: f64, rate: f64, rng: &mut R) -> f64 {
    if rng.gen::<f64>() < rate {
        value * rng.gen_range(0.9..=1.1)
    } else {
        value
    }
}

fn nudge<R: Rng>(value: f64, rate: f64, rng: &mut R) -> f64 {
    if rng.gen::<f64>() < rate {
        (value + rng.gen_range(-0.1..=0.1)).clamp(0.0, 1.0)
    } else {
        value
    }
}

/// Per-field point mutation with probability `mutation_rate`.
///
/// Unbounded fields are scaled by up to ±10%; aggressiveness and fear level
/// shift by up to ±0.1 and stay in [0, 1].
pub fn mutate_with_rng<R: Rng>(traits: &Traits, mutation_rate: f64, rng: &mut R) -> Traits {
    Traits {
        speed: scale(traits.speed, mutation_rate, rng),
        size: scale(traits.size, mutation_rate, rng),
        energy: scale(traits.energy, mutation_rate, rng),
        aggressiveness: nudge(traits.aggressiveness, mutation_rate, rng),
        fear_level: nudge(traits.fear_level, mutation_rate, rng),
        hunger_threshold: scale(traits.hunger_threshold, mutation_rate, rng),
        reproduction_threshold: scale(traits.reproduction_threshold, mutation_rate, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::generate_random_traits_with_rng;
    use evolife_data::Species;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_rate_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let t = generate_random_traits_with_rng(Species::Predator, &mut rng);
        assert_eq!(mutate_with_rng(&t, 0.0, &mut rng), t);
    }

    #[test]
    fn test_bounded_fields_clamped_at_edges() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut t = generate_random_traits_with_rng(Species::Prey, &mut rng);
        t.fear_level = 1.0;
        t.aggressiveness = 0.0;
        for _ in 0..100 {
            let m = mutate_with_rng(&t, 1.0, &mut rng);
            assert!((0.0..=1.0).contains(&m.fear_level));
            assert!((0.0..=1.0).contains(&m.aggressiveness));
        }
    }
}
