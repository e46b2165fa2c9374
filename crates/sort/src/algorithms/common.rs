#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[inline]
pub fn is_sorted_non_increasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] >= w[1])
}
