//! Bounded-heap selection.
//!
//! Keeps only the `k` smallest elements seen so far in a max-heap, so the
//! root is the k-th smallest once the input is exhausted. When `k` lies in
//! the upper half, the mirror image is cheaper: keep the `n - k + 1`
//! largest in a min-heap and read its root instead. O(n log m) time and
//! O(m) space with `m = min(k, n - k + 1)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;

// External dependencies
use core::cmp::{Ordering, Reverse};

// Internal dependencies
use crate::primitives::element::Element;

// Adapts `Element::compare` to `Ord` for `BinaryHeap`.
struct Ranked<T>(T);

impl<T: Element> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.compare(&other.0) == Ordering::Equal
    }
}

impl<T: Element> Eq for Ranked<T> {}

impl<T: Element> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Element> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.compare(&other.0)
    }
}

/// The k-th smallest element, or `None` if `k` is outside `1..=data.len()`.
pub fn kth_smallest_priority_queue<T: Element>(data: &[T], k: usize) -> Option<T> {
    let len = data.len();
    if k == 0 || k > len {
        return None;
    }
    let from_top = len - k + 1;
    if k <= from_top {
        largest_of_smallest(data.iter().cloned().map(Ranked), k).map(|Ranked(value)| value)
    } else {
        largest_of_smallest(data.iter().cloned().map(|value| Reverse(Ranked(value))), from_top)
            .map(|Reverse(Ranked(value))| value)
    }
}

// Largest of the `capacity` smallest items, via a bounded max-heap.
fn largest_of_smallest<K, I>(items: I, capacity: usize) -> Option<K>
where
    K: Ord,
    I: Iterator<Item = K>,
{
    let mut heap = BinaryHeap::with_capacity(capacity);
    for item in items {
        if heap.len() < capacity {
            heap.push(item);
        } else if let Some(mut top) = heap.peek_mut() {
            if item < *top {
                *top = item;
            }
        }
    }
    heap.pop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_heap_directions_agree() {
        let data = [9, 4, 7, 1, 8, 2, 6, 3, 5];
        for k in 1..=data.len() {
            assert_eq!(kth_smallest_priority_queue(&data, k), Some(k as i32));
        }
    }

    #[test]
    fn out_of_range_rank_is_none() {
        assert_eq!(kth_smallest_priority_queue(&[1, 2], 0), None);
        assert_eq!(kth_smallest_priority_queue(&[1, 2], 3), None);
    }
}
