use std::cmp::Ordering;

use crate::SortContext;

/// Three-way ordering that ranks multiples of `k` ahead of everything else.
///
/// - Two multiples of `k` compare equal, so a left-preferring merge keeps their input order.
/// - A multiple of `k` is less than a non-multiple.
/// - Two non-multiples compare numerically.
///
/// Divisibility uses the truncating remainder (`wrapping_rem`). A zero remainder does not depend
/// on sign, so `-10` is a multiple of `5` and of `-5`, and `i32::MIN` is a multiple of `-1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DivisibleFirst {
    k: i32,
}

impl DivisibleFirst {
    /// Returns `None` for `k == 0`.
    pub fn new(k: i32) -> Option<Self> {
        (k != 0).then_some(Self { k })
    }

    #[inline]
    pub fn k(self) -> i32 {
        self.k
    }

    #[inline]
    pub fn is_divisible(self, x: i32) -> bool {
        x.wrapping_rem(self.k) == 0
    }

    #[inline]
    pub fn compare(self, a: i32, b: i32) -> Ordering {
        match (self.is_divisible(a), self.is_divisible(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => a.cmp(&b),
        }
    }

    /// Multiples of `k` form a prefix and the remaining suffix is non-decreasing.
    pub fn is_ordered(self, data: &[i32]) -> bool {
        data.windows(2).all(|w| self.compare(w[0], w[1]) != Ordering::Greater)
    }
}

pub fn sort(data: &mut [i32], k: i32, ctx: &mut SortContext) {
    let Some(cmp) = DivisibleFirst::new(k) else {
        log::debug!("divisible-first merge sort skipped: k == 0 (len={})", data.len());
        return;
    };
    let len = data.len();
    if len < 2 {
        log::debug!("divisible-first merge sort skipped: len={len}");
        return;
    }

    let buf = ctx.ensure_scratch(len);
    merge_sort_recursive(data, buf, cmp, 0, len - 1);
}

/// Sorts the inclusive range `[left, right]`.
fn merge_sort_recursive(
    data: &mut [i32],
    buf: &mut [i32],
    cmp: DivisibleFirst,
    left: usize,
    right: usize,
) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;

    merge_sort_recursive(data, buf, cmp, left, mid);
    merge_sort_recursive(data, buf, cmp, mid + 1, right);
    merge(data, buf, cmp, left, mid, right);
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]` through a scratch segment of
/// exactly `right - left + 1` slots.
fn merge(
    data: &mut [i32],
    buf: &mut [i32],
    cmp: DivisibleFirst,
    left: usize,
    mid: usize,
    right: usize,
) {
    let temp = &mut buf[..right - left + 1];
    let mut i = left;
    let mut j = mid + 1;
    let mut k = 0usize;

    while i <= mid && j <= right {
        // Ties take from the left run.
        if cmp.compare(data[i], data[j]) != Ordering::Greater {
            temp[k] = data[i];
            i += 1;
        } else {
            temp[k] = data[j];
            j += 1;
        }
        k += 1;
    }

    if i <= mid {
        temp[k..].copy_from_slice(&data[i..=mid]);
    } else if j <= right {
        temp[k..].copy_from_slice(&data[j..=right]);
    }

    data[left..=right].copy_from_slice(temp);
}
