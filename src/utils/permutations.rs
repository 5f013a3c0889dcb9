use std::cmp::Ordering;

/// Rearrange `items` into the next lexicographically greater permutation
/// under `compare`.
///
/// Returns `false` when `items` was the last permutation, in which case it is
/// reset to the first (ascending) one. Equal elements are not swapped with
/// each other, so starting from a sorted slice visits every distinct
/// permutation of a multiset exactly once.
pub fn next_permutation_by<T, F>(items: &mut [T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`
    let Some(pivot) = (0..items.len() - 1)
        .rev()
        .find(|&i| compare(&items[i], &items[i + 1]) == Ordering::Less)
    else {
        items.reverse();
        return false;
    };

    let Some(successor) = (pivot + 1..items.len())
        .rev()
        .find(|&j| compare(&items[pivot], &items[j]) == Ordering::Less)
    else {
        items.reverse();
        return false;
    };

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    next_permutation_by(items, T::cmp)
}
