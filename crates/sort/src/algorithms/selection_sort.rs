use crate::Order;

pub fn sort(data: &mut [i32], order: Order) {
    match order {
        Order::Ascending => selection_sort_by(data, |candidate, best| candidate < best),
        Order::Descending => selection_sort_by(data, |candidate, best| candidate > best),
    }
}

/// `better` must be strict so the first index holding the extremum wins.
#[inline]
fn selection_sort_by<F>(data: &mut [i32], better: F)
where
    F: Fn(i32, i32) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut target = i;
        for j in (i + 1)..len {
            if better(data[j], data[target]) {
                target = j;
            }
        }
        data.swap(i, target);
    }
}
