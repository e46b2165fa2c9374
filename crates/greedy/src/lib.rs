//! Greedy decision procedures over integer slices.
//!
//! Both entry points sort a private copy of their input; the `_sorted` variants skip that copy
//! for callers that already hold ascending data.

mod asteroids;
mod rescue_sleds;

pub use asteroids::{asteroids_destroyed, asteroids_destroyed_sorted};
pub use rescue_sleds::{num_rescue_sleds, num_rescue_sleds_sorted};

#[inline]
pub(crate) fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
