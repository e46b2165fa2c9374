use crate::is_sorted_non_decreasing;

/// Returns whether a planet of `mass` can absorb every asteroid, colliding with the lightest
/// remaining one each time. A collision succeeds when the planet's mass is at least the
/// asteroid's; the asteroid's mass is then added to the planet.
///
/// The caller's slice is not reordered.
pub fn asteroids_destroyed(mass: i32, asteroids: &[i32]) -> bool {
    let mut sorted = asteroids.to_vec();
    sorted.sort_unstable();
    asteroids_destroyed_sorted(mass, &sorted)
}

/// Same as [`asteroids_destroyed`] for an already ascending slice.
pub fn asteroids_destroyed_sorted(mass: i32, asteroids: &[i32]) -> bool {
    debug_assert!(is_sorted_non_decreasing(asteroids));

    let mut mass = i64::from(mass);
    for (idx, &asteroid) in asteroids.iter().enumerate() {
        let asteroid = i64::from(asteroid);
        if mass < asteroid {
            log::trace!(
                "planet of mass {mass} stopped by asteroid {asteroid} ({} of {} absorbed)",
                idx,
                asteroids.len()
            );
            return false;
        }
        mass = mass.saturating_add(asteroid);
    }
    true
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn known_cases() {
        assert!(asteroids_destroyed(10, &[3, 9, 19, 5, 21]));
        assert!(!asteroids_destroyed(2, &[3, 9, 19, 5, 21]));
        assert!(!asteroids_destroyed(5, &[4, 9, 23, 4]));
        assert!(asteroids_destroyed(10, &[3, 9, 19, 5]));
        assert!(asteroids_destroyed(1, &[1, 2, 4, 8, 16]));
    }

    #[test]
    fn empty_field_is_always_survived() {
        for mass in [0, 1, 42, -7, i32::MAX, i32::MIN] {
            assert!(asteroids_destroyed(mass, &[]));
        }
    }

    #[test]
    fn equal_mass_is_survivable() {
        assert!(asteroids_destroyed(7, &[7]));
        assert!(!asteroids_destroyed(6, &[7]));
        assert!(asteroids_destroyed(0, &[0, 0]));
    }

    #[test]
    fn input_is_left_untouched() {
        let field = vec![19, 3, 9, 5];
        assert!(asteroids_destroyed(10, &field));
        assert_eq!(field, vec![19, 3, 9, 5]);
    }

    #[test]
    fn large_masses_do_not_overflow() {
        assert!(asteroids_destroyed(i32::MAX, &[i32::MAX; 64]));
        assert!(!asteroids_destroyed(i32::MAX - 1, &[i32::MAX]));
    }

    #[test]
    fn negative_asteroids_shrink_the_planet() {
        assert!(asteroids_destroyed(3, &[-1, 2]));
        assert!(!asteroids_destroyed(3, &[-1, 3]));
        assert!(!asteroids_destroyed(0, &[-5, -1, 4]));
    }

    #[test]
    fn sorted_variant_matches() {
        let mut field = vec![21, 3, 9, 5, 19];
        field.sort_unstable();
        assert!(!asteroids_destroyed_sorted(2, &field));
        assert!(asteroids_destroyed_sorted(3, &field));
    }

    #[test]
    fn order_invariant_and_monotone_in_mass() {
        let mut rng = StdRng::seed_from_u64(0xA57E_2026);
        for _ in 0..200 {
            let len = rng.random_range(0..24);
            let mut field: Vec<i32> = (0..len).map(|_| rng.random_range(0..200)).collect();
            let mass = rng.random_range(0..60);
            let expected = asteroids_destroyed(mass, &field);

            field.shuffle(&mut rng);
            assert_eq!(asteroids_destroyed(mass, &field), expected, "field={field:?}");

            if expected {
                assert!(asteroids_destroyed(mass + 1, &field));
                assert!(asteroids_destroyed(mass + 100, &field));
            } else if mass > 0 {
                assert!(!asteroids_destroyed(mass - 1, &field));
            }
        }
    }
}
