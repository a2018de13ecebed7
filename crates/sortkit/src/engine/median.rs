//! Order-statistics strategies behind a common contract.
//!
//! ## Purpose
//!
//! This module defines [`MedianFinder`] and its three strategies. Every
//! query validates the input (emptiness, element type, rank) and then
//! delegates to the statistics layer.
//!
//! ## Design notes
//!
//! * **Agreement**: All strategies return the same value for the same
//!   `(data, k)`. The median is the lower median, i.e. the
//!   `ceil(n / 2)`-th smallest element, for every strategy.
//! * **Non-destructive**: The caller's slice is never reordered.
//!
//! ## Key concepts
//!
//! * **Rank**: `k` is 1-indexed; `k = 1` is the minimum and `k = n` the maximum.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::element::Element;
use crate::primitives::errors::SortkitError;
use crate::primitives::rng::{DEFAULT_SEED, PivotRng};
use crate::statistics::brute_force::kth_smallest_brute_force;
use crate::statistics::priority_queue::kth_smallest_priority_queue;
use crate::statistics::quickselect::kth_smallest_quickselect;

// ============================================================================
// Contract
// ============================================================================

/// An order-statistics strategy.
pub trait MedianFinder<T: Element> {
    /// Short strategy name.
    fn name(&self) -> &'static str;

    /// The k-th smallest element, with `k` in `1..=data.len()`.
    fn find_kth_smallest(&self, data: &[T], k: usize) -> Result<T, SortkitError>;

    /// The smallest element.
    fn find_minimum(&self, data: &[T]) -> Result<T, SortkitError> {
        self.find_kth_smallest(data, 1)
    }

    /// The largest element.
    fn find_maximum(&self, data: &[T]) -> Result<T, SortkitError> {
        Validator::validate_order_input(data)?;
        self.find_kth_smallest(data, data.len())
    }

    /// The middle element; for even lengths, the lower of the two central ones.
    fn find_median(&self, data: &[T]) -> Result<T, SortkitError> {
        Validator::validate_order_input(data)?;
        self.find_kth_smallest(data, data.len().div_ceil(2))
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// Copy, sort, index. The reference strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BruteForceMedianFinder;

impl<T: Element> MedianFinder<T> for BruteForceMedianFinder {
    fn name(&self) -> &'static str {
        "BruteForce"
    }

    fn find_kth_smallest(&self, data: &[T], k: usize) -> Result<T, SortkitError> {
        Validator::validate_selection(data, k)?;
        kth_smallest_brute_force(data, k).ok_or(SortkitError::RankOutOfRange { k, len: data.len() })
    }
}

/// Bounded binary heap over the nearer end of the rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PQMedianFinder;

impl<T: Element> MedianFinder<T> for PQMedianFinder {
    fn name(&self) -> &'static str {
        "PriorityQueue"
    }

    fn find_kth_smallest(&self, data: &[T], k: usize) -> Result<T, SortkitError> {
        Validator::validate_selection(data, k)?;
        kth_smallest_priority_queue(data, k).ok_or(SortkitError::RankOutOfRange { k, len: data.len() })
    }
}

/// Randomized quickselect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSelectMedianFinder {
    /// Seed for pivot selection.
    pub seed: u64,
}

impl QuickSelectMedianFinder {
    /// Quickselect with the default pivot seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Quickselect with an explicit pivot seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for QuickSelectMedianFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> MedianFinder<T> for QuickSelectMedianFinder {
    fn name(&self) -> &'static str {
        "QuickSelect"
    }

    fn find_kth_smallest(&self, data: &[T], k: usize) -> Result<T, SortkitError> {
        Validator::validate_selection(data, k)?;
        let mut rng = PivotRng::new(self.seed);
        kth_smallest_quickselect(data, k, &mut rng)
            .ok_or(SortkitError::RankOutOfRange { k, len: data.len() })
    }
}
