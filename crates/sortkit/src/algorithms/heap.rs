//! Heapsort with a configurable heap orientation.
//!
//! Builds a binary heap over the slice in place, then repeatedly swaps the
//! root behind the shrinking heap. A max-heap leaves the slice ascending; a
//! min-heap leaves it descending, i.e. in the heap's natural extraction
//! order. The orientation only flips the comparison used while sifting.
//! O(n log n), O(1) extra space, not stable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::list::{Link, detach, relink};

/// Which extreme the heap keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrientation {
    /// Largest element at the root; output is ascending.
    #[default]
    Max,

    /// Smallest element at the root; output is descending.
    Min,
}

impl HeapOrientation {
    /// Order used while sifting: `Greater` means `a` belongs nearer the root.
    #[inline]
    fn sift_order<T, F>(self, a: &T, b: &T, compare: &mut F) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Self::Max => compare(a, b),
            Self::Min => compare(b, a),
        }
    }
}

/// Sort a slice with the given heap orientation.
pub fn heap_sort<T: Ord>(v: &mut [T], orientation: HeapOrientation) {
    heap_sort_by(v, orientation, T::cmp);
}

/// Sort a slice with the given heap orientation and a comparator.
pub fn heap_sort_by<T, F>(v: &mut [T], orientation: HeapOrientation, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    for root in (0..len / 2).rev() {
        sift_down(v, root, len, orientation, &mut compare);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, orientation, &mut compare);
    }
}

fn sift_down<T, F>(v: &mut [T], mut root: usize, end: usize, orientation: HeapOrientation, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end
            && orientation.sift_order(&v[child], &v[child + 1], compare) == Ordering::Less
        {
            child += 1;
        }
        if orientation.sift_order(&v[root], &v[child], compare) != Ordering::Less {
            break;
        }
        v.swap(root, child);
        root = child;
    }
}

/// Sort a chain by buffering its nodes, heapsorting the buffer and relinking.
pub fn heap_sort_list_by<T, F>(head: Link<T>, orientation: HeapOrientation, mut compare: F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut nodes: Vec<_> = detach(head);
    heap_sort_by(&mut nodes, orientation, |a, b| compare(&a.value, &b.value));
    relink(nodes)
}
