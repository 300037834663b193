/// Asserts that every creature lies inside the arena boundary.
#[macro_export]
macro_rules! assert_within_bounds {
    ($sim:expr) => {
        let bound = $sim.boundary() + 1e-9;
        for c in $sim.creatures() {
            assert!(
                c.position.x.abs() <= bound && c.position.z.abs() <= bound,
                "Creature {} at ({}, {}) outside boundary {}",
                c.id,
                c.position.x,
                c.position.z,
                bound
            );
        }
    };
}

/// Asserts that the species populations match the given counts.
#[macro_export]
macro_rules! assert_population {
    ($sim:expr, predators = $p:expr, prey = $q:expr) => {
        assert_eq!(
            $sim.count(evolife_lib::model::state::Species::Predator),
            $p,
            "predator count"
        );
        assert_eq!(
            $sim.count(evolife_lib::model::state::Species::Prey),
            $q,
            "prey count"
        );
    };
}
