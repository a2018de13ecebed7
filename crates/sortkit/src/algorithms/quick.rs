//! Randomized quicksort.
//!
//! Each round picks a random (or median-of-three random) pivot, performs a
//! three-way partition, recurses into the smaller side and loops on the
//! larger one. Recursion depth is therefore O(log n) even in the worst
//! case, and short slices finish with insertion sort. Not stable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::insertion::insertion_sort_by;
use crate::algorithms::partition::{choose_pivot, partition_three_way};
use crate::primitives::list::{Link, detach, relink};
use crate::primitives::rng::PivotRng;

/// Slices at most this long are finished with insertion sort.
pub const INSERTION_THRESHOLD: usize = 16;

/// Sort a slice in ascending order.
pub fn quick_sort<T: Ord>(v: &mut [T], rng: &mut PivotRng) {
    quick_sort_by(v, rng, T::cmp);
}

/// Sort a slice with a comparator.
pub fn quick_sort_by<T, F>(v: &mut [T], rng: &mut PivotRng, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(v, rng, &mut compare);
}

fn sort_range<T, F>(mut v: &mut [T], rng: &mut PivotRng, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > INSERTION_THRESHOLD {
        let pivot = choose_pivot(v, rng, compare);
        let (lt, gt) = partition_three_way(v, pivot, compare);

        let (left, rest) = core::mem::take(&mut v).split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            sort_range(left, rng, compare);
            v = right;
        } else {
            sort_range(right, rng, compare);
            v = left;
        }
    }
    insertion_sort_by(v, compare);
}

/// Sort a chain by buffering its nodes, sorting the buffer and relinking.
pub fn quick_sort_list_by<T, F>(head: Link<T>, rng: &mut PivotRng, mut compare: F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut nodes: Vec<_> = detach(head);
    quick_sort_by(&mut nodes, rng, |a, b| compare(&a.value, &b.value));
    relink(nodes)
}
