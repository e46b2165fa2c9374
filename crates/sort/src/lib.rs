mod algorithms;

pub use algorithms::merge_sort_div_k::DivisibleFirst;

/// Direction for [`selection_sort`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

pub const ALL_ORDERS: [Order; 2] = [Order::Ascending, Order::Descending];

pub fn order_name(order: Order) -> &'static str {
    match order {
        Order::Ascending => "ascending",
        Order::Descending => "descending",
    }
}

#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub scratch: Vec<i32>,
}

impl SortContext {
    #[inline]
    pub(crate) fn ensure_scratch(&mut self, len: usize) -> &mut [i32] {
        if self.scratch.len() < len {
            self.scratch.resize(len, 0);
        }
        &mut self.scratch[..len]
    }
}

/// In-place selection sort. Equal extrema are taken by first occurrence.
pub fn selection_sort(values: &mut [i32], order: Order) {
    algorithms::selection_sort::sort(values, order);
}

pub fn selection_sort_ascending(values: &mut [i32]) {
    selection_sort(values, Order::Ascending);
}

pub fn selection_sort_descending(values: &mut [i32]) {
    selection_sort(values, Order::Descending);
}

/// Places every element divisible by `k` first, in input order, followed by
/// the remaining elements in ascending order.
///
/// `k == 0` and slices shorter than two elements are left untouched.
pub fn merge_sort_divisible_by_k_first(values: &mut [i32], k: i32) {
    let mut ctx = SortContext::default();
    merge_sort_divisible_by_k_first_with_ctx(values, k, &mut ctx);
}

pub fn merge_sort_divisible_by_k_first_with_ctx(
    values: &mut [i32],
    k: i32,
    ctx: &mut SortContext,
) {
    algorithms::merge_sort_div_k::sort(values, k, ctx);
}

pub fn is_sorted_by_order(values: &[i32], order: Order) -> bool {
    match order {
        Order::Ascending => algorithms::common::is_sorted_non_decreasing(values),
        Order::Descending => algorithms::common::is_sorted_non_increasing(values),
    }
}
