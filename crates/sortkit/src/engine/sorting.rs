//! Sorting strategies behind a common contract.
//!
//! ## Purpose
//!
//! This module defines [`SortingEngine`] and one strategy type per
//! algorithm. Callers pick a strategy and use it against slices or lists.
//!
//! ## Design notes
//!
//! * **Asymmetric validation**: The slice path accepts empty and
//!   single-element input silently; the list path rejects a null head
//!   ([`SortkitError::NullList`]) and an empty [`LinkedList`]
//!   ([`SortkitError::EmptyList`]).
//! * **Stateless**: Strategies are `Copy` configuration values; a seeded
//!   quicksort creates a fresh generator per call.
//!
//! ## Invariants
//!
//! * Output is a permutation of the input in ascending order (descending
//!   for [`HeapOrientation::Min`]).
//! * `is_stable()` is true exactly for bubble, insertion and both merge sorts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

// Internal dependencies
use crate::algorithms::bubble::{bubble_sort, bubble_sort_list_by};
use crate::algorithms::heap::{HeapOrientation, heap_sort, heap_sort_list_by};
use crate::algorithms::insertion::{insertion_sort, insertion_sort_list_by};
use crate::algorithms::merge::{
    bottom_up_merge_sort, bottom_up_merge_sort_list_by, top_down_merge_sort,
    top_down_merge_sort_list_by,
};
use crate::algorithms::quick::{quick_sort, quick_sort_list_by};
use crate::algorithms::selection::{selection_sort, selection_sort_list_by};
use crate::engine::validator::Validator;
use crate::primitives::errors::SortkitError;
use crate::primitives::list::{Link, LinkedList, ListNode};
use crate::primitives::rng::{DEFAULT_SEED, PivotRng};

// ============================================================================
// Contract
// ============================================================================

/// A sorting algorithm usable on slices and singly-linked lists.
pub trait SortingEngine<T: Ord + Clone> {
    /// Short algorithm name.
    fn name(&self) -> &'static str;

    /// Whether equal elements keep their relative order.
    fn is_stable(&self) -> bool;

    /// Sort a slice in place. Empty and single-element slices are no-ops.
    fn sort(&self, data: &mut [T]);

    /// Sort a chain and return its new head.
    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError>;

    /// Sort a [`LinkedList`] in place.
    fn sort_linked_list(&self, list: &mut LinkedList<T>) -> Result<(), SortkitError> {
        Validator::validate_linked_list(list)?;
        let sorted = self.sort_list(list.take_head())?;
        list.set_head(Some(sorted));
        Ok(())
    }
}

// Validate a head, run a chain sort on it, and hand back the new head.
//
// Only the null head can fail. Chain sorts relink every node they are
// given, so a non-empty chain always comes back non-empty.
fn sorted_head<T, S>(head: Link<T>, sort: S) -> Result<Box<ListNode<T>>, SortkitError>
where
    S: FnOnce(Link<T>) -> Link<T>,
{
    let head = Validator::validate_list_head(head)?;
    match sort(Some(head)) {
        Some(sorted) => Ok(sorted),
        None => unreachable!(),
    }
}

// ============================================================================
// Quadratic Strategies
// ============================================================================

/// Bubble sort. Stable, O(n²).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl<T: Ord + Clone> SortingEngine<T> for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [T]) {
        bubble_sort(data);
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        sorted_head(head, |head| bubble_sort_list_by(head, T::cmp))
    }
}

/// Selection sort. O(n²), not stable on slices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSort;

impl<T: Ord + Clone> SortingEngine<T> for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, data: &mut [T]) {
        selection_sort(data);
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        sorted_head(head, |head| selection_sort_list_by(head, T::cmp))
    }
}

/// Insertion sort. Stable, O(n²), linear on sorted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionSort;

impl<T: Ord + Clone> SortingEngine<T> for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [T]) {
        insertion_sort(data);
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        sorted_head(head, |head| insertion_sort_list_by(head, T::cmp))
    }
}

// ============================================================================
// Merge Strategies
// ============================================================================

/// Recursive top-down merge sort. Stable, O(n log n).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopDownMergeSort;

impl<T: Ord + Clone> SortingEngine<T> for TopDownMergeSort {
    fn name(&self) -> &'static str {
        "TopDownMerge"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [T]) {
        top_down_merge_sort(data);
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        sorted_head(head, |head| top_down_merge_sort_list_by(head, T::cmp))
    }
}

/// Iterative bottom-up merge sort. Stable, O(n log n), no recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BottomUpMergeSort;

impl<T: Ord + Clone> SortingEngine<T> for BottomUpMergeSort {
    fn name(&self) -> &'static str {
        "BottomUpMerge"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, data: &mut [T]) {
        bottom_up_merge_sort(data);
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        sorted_head(head, |head| bottom_up_merge_sort_list_by(head, T::cmp))
    }
}

// ============================================================================
// Partition and Heap Strategies
// ============================================================================

/// Randomized quicksort. O(n log n) expected, not stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSort {
    /// Seed for pivot selection.
    pub seed: u64,
}

impl QuickSort {
    /// Quicksort with the default pivot seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Quicksort with an explicit pivot seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for QuickSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> SortingEngine<T> for QuickSort {
    fn name(&self) -> &'static str {
        "Quick"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, data: &mut [T]) {
        quick_sort(data, &mut PivotRng::new(self.seed));
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        let mut rng = PivotRng::new(self.seed);
        sorted_head(head, |head| quick_sort_list_by(head, &mut rng, T::cmp))
    }
}

/// Heapsort over a max-heap (ascending) or min-heap (descending). Not stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapSort {
    /// Heap orientation used while sifting.
    pub orientation: HeapOrientation,
}

impl HeapSort {
    /// Heapsort with the given orientation.
    pub fn new(orientation: HeapOrientation) -> Self {
        Self { orientation }
    }
}

impl<T: Ord + Clone> SortingEngine<T> for HeapSort {
    fn name(&self) -> &'static str {
        "Heap"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, data: &mut [T]) {
        heap_sort(data, self.orientation);
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        sorted_head(head, |head| heap_sort_list_by(head, self.orientation, T::cmp))
    }
}
