//! Sort-then-index selection.
//!
//! The reference strategy: a full stable sort of a copy, then a lookup.
//! O(n log n) time, O(n) extra space.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::merge::bottom_up_merge_sort_by;
use crate::primitives::element::Element;

/// The k-th smallest element, or `None` if `k` is outside `1..=data.len()`.
pub fn kth_smallest_brute_force<T: Element>(data: &[T], k: usize) -> Option<T> {
    let index = k.checked_sub(1)?;
    if index >= data.len() {
        return None;
    }
    let mut sorted: Vec<T> = data.to_vec();
    bottom_up_merge_sort_by(&mut sorted, T::compare);
    Some(sorted.swap_remove(index))
}
