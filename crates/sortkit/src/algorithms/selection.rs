//! Selection sort.
//!
//! The slice form swaps the minimum of the unsorted suffix into place and
//! is not stable. The list form unlinks the first minimum node of the
//! remaining chain and appends it to the output, which is stable.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::list::{Link, ListNode, unlink_at};

/// Sort a slice in ascending order.
pub fn selection_sort<T: Ord>(v: &mut [T]) {
    selection_sort_by(v, T::cmp);
}

/// Sort a slice with a comparator.
pub fn selection_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    for i in 0..len {
        let mut min = i;
        for j in (i + 1)..len {
            if compare(&v[j], &v[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }
}

/// Sort a chain by repeatedly moving its minimum node to the output tail.
pub fn selection_sort_list_by<T, F>(mut rest: Link<T>, mut compare: F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = None;
    let mut tail = &mut sorted;
    while let Some(first) = rest.as_deref() {
        let index = position_of_min(first, &mut compare);
        if let Some(node) = unlink_at(&mut rest, index) {
            tail = &mut tail.insert(node).next;
        }
    }
    sorted
}

// Index of the first minimum value in the chain.
fn position_of_min<T, F>(head: &ListNode<T>, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut best = &head.value;
    let mut best_index = 0;
    for (i, value) in head.iter().enumerate().skip(1) {
        if compare(value, best) == Ordering::Less {
            best = value;
            best_index = i;
        }
    }
    best_index
}
