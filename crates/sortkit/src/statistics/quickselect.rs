//! Partition-based selection.
//!
//! Partitions a copy of the input around a random pivot and keeps only the
//! side containing the requested rank, looping instead of recursing.
//! Expected O(n) time; the three-way partition finishes immediately once
//! the rank falls among elements equal to the pivot.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::partition::{choose_pivot, partition_three_way};
use crate::primitives::element::Element;
use crate::primitives::rng::PivotRng;

/// The k-th smallest element, or `None` if `k` is outside `1..=data.len()`.
pub fn kth_smallest_quickselect<T: Element>(data: &[T], k: usize, rng: &mut PivotRng) -> Option<T> {
    let target = k.checked_sub(1)?;
    if target >= data.len() {
        return None;
    }

    let mut values: Vec<T> = data.to_vec();
    let mut compare = |a: &T, b: &T| a.compare(b);
    let (mut lo, mut hi) = (0, values.len());
    while hi - lo > 1 {
        let window = &mut values[lo..hi];
        let pivot = choose_pivot(window, rng, &mut compare);
        let (lt, gt) = partition_three_way(window, pivot, &mut compare);

        let offset = target - lo;
        if offset < lt {
            hi = lo + lt;
        } else if offset >= gt {
            lo += gt;
        } else {
            break;
        }
    }
    Some(values.swap_remove(target))
}
