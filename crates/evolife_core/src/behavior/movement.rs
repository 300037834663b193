use evolife_data::Creature;

/// Integrates velocity over `delta` and then applies friction.
pub fn apply_movement(me: &mut Creature, delta: f64, friction: f64) {
    me.position += me.velocity * delta;
    me.velocity *= friction;
}

/// Clamps to the square arena, turning velocity back inward on the axis
/// that crossed a wall, and pins the creature to the ground.
pub fn keep_in_bounds(me: &mut Creature, boundary: f64) {
    if me.position.x > boundary {
        me.position.x = boundary;
        me.velocity.x = -me.velocity.x.abs();
    } else if me.position.x < -boundary {
        me.position.x = -boundary;
        me.velocity.x = me.velocity.x.abs();
    }
    if me.position.z > boundary {
        me.position.z = boundary;
        me.velocity.z = -me.velocity.z.abs();
    } else if me.position.z < -boundary {
        me.position.z = -boundary;
        me.velocity.z = me.velocity.z.abs();
    }
    me.position.y = me.traits.size / 2.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::tests::creature;
    use evolife_data::{Species, Vec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_movement_then_friction() {
        let mut rng = ChaCha8Rng::seed_from_u64(30);
        let mut me = creature(Species::Prey, 0.0, 0.0, &mut rng);
        me.velocity = Vec3::new(2.0, 0.0, -1.0);

        apply_movement(&mut me, 0.5, 0.9);

        assert!((me.position.x - 1.0).abs() < 1e-12);
        assert!((me.position.z + 0.5).abs() < 1e-12);
        assert!((me.velocity.x - 1.8).abs() < 1e-12);
        assert!((me.velocity.z + 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_wall_reflects_only_offending_axis() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut me = creature(Species::Predator, 19.0, 3.0, &mut rng);
        me.velocity = Vec3::new(1.0, 0.0, 1.0);

        keep_in_bounds(&mut me, 18.0);

        assert_eq!(me.position.x, 18.0);
        assert_eq!(me.position.z, 3.0);
        assert_eq!(me.velocity.x, -1.0);
        assert_eq!(me.velocity.z, 1.0);
    }

    #[test]
    fn test_creature_is_grounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let mut me = creature(Species::Prey, 0.0, -25.0, &mut rng);
        me.position.y = 7.0;

        keep_in_bounds(&mut me, 18.0);

        assert_eq!(me.position.z, -18.0);
        assert_eq!(me.position.y, me.traits.size / 2.0);
    }

    #[test]
    fn test_inward_velocity_survives_clamp() {
        let mut rng = ChaCha8Rng::seed_from_u64(33);
        let mut me = creature(Species::Prey, 15.0, -15.0, &mut rng);
        me.velocity = Vec3::new(-0.5, 0.0, 0.5);

        keep_in_bounds(&mut me, 8.0);

        assert_eq!(me.position.x, 8.0);
        assert_eq!(me.position.z, -8.0);
        assert_eq!(me.velocity.x, -0.5);
        assert_eq!(me.velocity.z, 0.5);
    }

    #[test]
    fn test_outward_velocity_turned_inward_at_negative_wall() {
        let mut rng = ChaCha8Rng::seed_from_u64(34);
        let mut me = creature(Species::Prey, -19.0, 0.0, &mut rng);
        me.velocity = Vec3::new(-2.0, 0.0, 0.0);

        keep_in_bounds(&mut me, 18.0);

        assert_eq!(me.position.x, -18.0);
        assert_eq!(me.velocity.x, 2.0);
    }
}
