//! Top-down and bottom-up merge sort.
//!
//! ## Purpose
//!
//! This module provides both classical merge sort shapes for slices and
//! for singly-linked chains. Both are stable and run in O(n log n).
//!
//! ## Design notes
//!
//! * **Slices**: A single scratch buffer of at most `n / 2 + 1` elements is
//!   reused by every merge. Only the left run is copied out; the merge then
//!   swaps values back into place, so each element is cloned at most once
//!   per merge level.
//! * **Top-down lists**: The midpoint is found with a slow/fast walk and
//!   merging is iterative, so recursion depth is O(log n) regardless of
//!   list length.
//! * **Bottom-up lists**: Fully iterative; runs of width 1, 2, 4, ... are
//!   cut off the chain and merged in passes.
//!
//! ## Invariants
//!
//! * Ties are always taken from the left run.
//! * Runs that are already in order are left untouched.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::mem;

// Internal dependencies
use crate::primitives::list::{Link, ListNode, front_half_len, merge_chains, split_off};

// ============================================================================
// Slices
// ============================================================================

/// Sort a slice with recursive top-down merge sort.
pub fn top_down_merge_sort<T: Ord + Clone>(v: &mut [T]) {
    top_down_merge_sort_by(v, T::cmp);
}

/// Sort a slice with recursive top-down merge sort and a comparator.
pub fn top_down_merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let mut buffer = Vec::with_capacity(v.len() / 2 + 1);
    split_and_merge(v, &mut buffer, &mut compare);
}

fn split_and_merge<T, F>(v: &mut [T], buffer: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let mid = v.len() / 2;
    split_and_merge(&mut v[..mid], buffer, compare);
    split_and_merge(&mut v[mid..], buffer, compare);
    merge_runs(v, mid, buffer, compare);
}

/// Sort a slice with iterative bottom-up merge sort.
pub fn bottom_up_merge_sort<T: Ord + Clone>(v: &mut [T]) {
    bottom_up_merge_sort_by(v, T::cmp);
}

/// Sort a slice with iterative bottom-up merge sort and a comparator.
pub fn bottom_up_merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    let mut buffer = Vec::with_capacity(len / 2 + 1);
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start + width < len {
            let end = (start + 2 * width).min(len);
            merge_runs(&mut v[start..end], width, &mut buffer, &mut compare);
            start = end;
        }
        width *= 2;
    }
}

/// Merge the sorted runs `v[..mid]` and `v[mid..]` in place.
pub(crate) fn merge_runs<T, F>(v: &mut [T], mid: usize, buffer: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if mid == 0 || mid >= len || compare(&v[mid - 1], &v[mid]) != Ordering::Greater {
        return;
    }

    buffer.clear();
    buffer.extend_from_slice(&v[..mid]);

    // Slots before `out` are final; slots in [out, right) hold consumed values.
    let (mut left, mut right, mut out) = (0, mid, 0);
    while left < buffer.len() && right < len {
        if compare(&v[right], &buffer[left]) == Ordering::Less {
            v.swap(out, right);
            right += 1;
        } else {
            mem::swap(&mut v[out], &mut buffer[left]);
            left += 1;
        }
        out += 1;
    }
    while left < buffer.len() {
        mem::swap(&mut v[out], &mut buffer[left]);
        left += 1;
        out += 1;
    }
}

// ============================================================================
// Lists
// ============================================================================

/// Sort a chain with top-down merge sort.
pub fn top_down_merge_sort_list_by<T, F>(head: Link<T>, mut compare: F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_chain(head, &mut compare)
}

fn sort_chain<T, F>(mut head: Link<T>, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let front = match head.as_deref() {
        Some(node) if node.next.is_some() => front_half_len(node),
        _ => return head,
    };
    let back = split_off(&mut head, front);
    let left = sort_chain(head, compare);
    let right = sort_chain(back, compare);
    merge_chains(left, right, compare)
}

/// Sort a chain with iterative bottom-up merge sort.
pub fn bottom_up_merge_sort_list_by<T, F>(mut head: Link<T>, mut compare: F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = head.as_deref().map_or(0, ListNode::len);
    let mut width = 1;
    while width < len {
        let mut remaining = head.take();
        let mut tail = &mut head;
        while remaining.is_some() {
            let mut left = remaining;
            let mut right = split_off(&mut left, width);
            remaining = split_off(&mut right, width);
            *tail = merge_chains(left, right, &mut compare);
            while let Some(node) = tail {
                tail = &mut node.next;
            }
        }
        width *= 2;
    }
    head
}
