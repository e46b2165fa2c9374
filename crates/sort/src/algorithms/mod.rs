pub(crate) mod common;
pub(crate) mod merge_sort_div_k;
pub(crate) mod selection_sort;
