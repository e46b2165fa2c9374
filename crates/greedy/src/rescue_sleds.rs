use crate::is_sorted_non_decreasing;

/// Minimum number of sleds needed to carry everyone, where a sled holds at most two people
/// whose combined weight is at most `limit`.
///
/// A person heavier than `limit` still gets a sled of their own. The caller's slice is not
/// reordered.
pub fn num_rescue_sleds(people: &[i32], limit: i32) -> usize {
    let mut sorted = people.to_vec();
    sorted.sort_unstable();
    num_rescue_sleds_sorted(&sorted, limit)
}

/// Same as [`num_rescue_sleds`] for an already ascending slice.
pub fn num_rescue_sleds_sorted(people: &[i32], limit: i32) -> usize {
    debug_assert!(is_sorted_non_decreasing(people));

    let limit = i64::from(limit);
    let mut sleds = 0usize;
    let mut paired = 0usize;
    // Unplaced people are `people[lo..hi]`; the heaviest of them always boards the next sled.
    let mut lo = 0usize;
    let mut hi = people.len();
    while lo < hi {
        let heaviest = hi - 1;
        if lo != heaviest && i64::from(people[lo]) + i64::from(people[heaviest]) <= limit {
            lo += 1;
            paired += 1;
        }
        hi -= 1;
        sleds += 1;
    }

    log::trace!(
        "{} people on {sleds} sleds ({paired} shared) with limit {limit}",
        people.len()
    );
    sleds
}
