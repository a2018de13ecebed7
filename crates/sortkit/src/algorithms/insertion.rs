//! Insertion sort.
//!
//! Grows a sorted prefix one element at a time. Stable, O(n²) worst case,
//! linear on already-sorted input. The list form relinks each node into a
//! sorted chain and uses no extra space besides pointers.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::list::Link;

/// Sort a slice in ascending order.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, T::cmp);
}

/// Sort a slice with a comparator.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sort a chain by inserting each node into a sorted chain.
///
/// A node is placed after every node that compares equal to it, so equal
/// values keep their input order.
pub fn insertion_sort_list_by<T, F>(mut rest: Link<T>, mut compare: F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted: Link<T> = None;
    while let Some(mut node) = rest {
        rest = node.next.take();

        let mut cursor = &mut sorted;
        while cursor
            .as_deref()
            .is_some_and(|placed| compare(&placed.value, &node.value) != Ordering::Greater)
        {
            if let Some(placed) = cursor {
                cursor = &mut placed.next;
            }
        }
        node.next = cursor.take();
        *cursor = Some(node);
    }
    sorted
}
