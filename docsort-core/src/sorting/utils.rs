//! Utility functions for sorting operations
//!
//! The comparator is deliberately not a total order (unparseable dates and
//! mismatched values tie with everything), and the standard library's sorts
//! may panic when they detect that. [`stable_sort_by`] is a plain merge sort
//! that accepts any comparator and never panics.

use std::cmp::Ordering;

/// Runs at or below this length are insertion sorted
const INSERTION_THRESHOLD: usize = 16;

/// Stable sort that tolerates inconsistent comparators
///
/// Elements that compare `Equal` keep their relative order. Intended for the
/// cheap `Copy` handles a view sorts (references and indices).
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= INSERTION_THRESHOLD {
        insertion_sort(items, &mut compare);
        return;
    }

    let mut scratch = items.to_vec();
    merge_sort(items, &mut scratch, &mut compare);
}

fn insertion_sort<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn merge_sort<T, F>(items: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort(items, compare);
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort(left, left_scratch, compare);
        merge_sort(right, right_scratch, compare);
    }

    if compare(&items[mid - 1], &items[mid]) != Ordering::Greater {
        return;
    }

    scratch.copy_from_slice(items);
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // Ties take from the left run, which is what keeps the sort stable.
        let take_right = j < right.len()
            && (i == left.len() || compare(&left[i], &right[j]) == Ordering::Greater);
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

/// Check if a slice is already sorted according to a comparison function
///
/// Equal neighbours count as sorted.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Positions `0..len`, the identity permutation a stable index sort starts from
pub fn identity_order(len: usize) -> Vec<usize> {
    (0..len).collect()
}
