//! Bubble sort.
//!
//! Repeatedly swaps adjacent out-of-order pairs. Each pass remembers where
//! its last swap happened; everything after it is already in place, so the
//! next pass stops there. Stable, O(n²) comparisons, O(1) extra space.

// External dependencies
use core::cmp::Ordering;
use core::mem;

// Internal dependencies
use crate::primitives::list::{Link, ListNode};

/// Sort a slice in ascending order.
pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    bubble_sort_by(v, T::cmp);
}

/// Sort a slice with a comparator.
pub fn bubble_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut end = v.len();
    while end > 1 {
        let mut last_swap = 0;
        for i in 1..end {
            if compare(&v[i - 1], &v[i]) == Ordering::Greater {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }
        end = last_swap;
    }
}

/// Sort a chain by swapping the values of adjacent nodes.
pub fn bubble_sort_list_by<T, F>(mut head: Link<T>, mut compare: F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Positions are 1-based; nodes past `unsorted` are final.
    let mut unsorted = head.as_deref().map_or(0, ListNode::len);
    while unsorted > 1 {
        let mut last_swap = 0;
        let mut position = 1;
        let mut cursor = head.as_deref_mut();
        while let Some(node) = cursor {
            if position >= unsorted {
                break;
            }
            if let Some(next) = node.next.as_deref_mut() {
                if compare(&node.value, &next.value) == Ordering::Greater {
                    mem::swap(&mut node.value, &mut next.value);
                    last_swap = position;
                }
            }
            cursor = node.next.as_deref_mut();
            position += 1;
        }
        unsorted = last_swap;
    }
    head
}
