//! High-level API for choosing and configuring engines.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements
//! fluent builders that select a strategy from a small closed set of tagged
//! variants and produce a ready-to-use engine value.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a sensible default.
//! * **Closed**: Strategies are enum variants chosen at construction time;
//!   the resulting [`Sorter`], [`Selector`] and [`Rotator`] dispatch to the
//!   matching strategy type and implement the same contract.
//! * **Validated**: Parameters are checked when `.build()` is called.
//!   Setting a parameter twice, or setting one the chosen strategy has no
//!   use for, is reported there rather than silently ignored.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Sort::new()`, `Median::new()` or `Rotate::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.seed()`, ...).
//! 3. Call `.build()` to obtain the engine.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

// Publicly re-exported types
pub use crate::algorithms::heap::HeapOrientation;
pub use crate::engine::median::{
    BruteForceMedianFinder, MedianFinder, PQMedianFinder, QuickSelectMedianFinder,
};
pub use crate::engine::rotation::{
    BlockSwapRotation, JugglingRotation, ReversalRotation, RotationEngine, ShiftRotation,
};
pub use crate::engine::validator::Validator;
pub use crate::engine::sorting::{
    BottomUpMergeSort, BubbleSort, HeapSort, InsertionSort, QuickSort, SelectionSort,
    SortingEngine, TopDownMergeSort,
};
pub use crate::primitives::element::{Element, ElementKind};
pub use crate::primitives::errors::SortkitError;
pub use crate::primitives::list::{Link, LinkedList, ListNode};
pub use crate::primitives::rng::{DEFAULT_SEED, PivotRng};
pub use crate::rotation::Direction;

// ============================================================================
// Sorting
// ============================================================================

/// Sorting algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// [`BubbleSort`].
    Bubble,
    /// [`SelectionSort`].
    Selection,
    /// [`InsertionSort`].
    Insertion,
    /// [`TopDownMergeSort`].
    TopDownMerge,
    /// [`BottomUpMergeSort`].
    #[default]
    BottomUpMerge,
    /// [`QuickSort`].
    Quick,
    /// [`HeapSort`].
    Heap,
}

/// Fluent builder for a [`Sorter`].
#[derive(Debug, Clone, Default)]
pub struct SortBuilder {
    /// Algorithm to run (default: bottom-up merge sort).
    pub algorithm: Option<Algorithm>,

    /// Heap orientation (Heap only, default: Max).
    pub orientation: Option<HeapOrientation>,

    /// Pivot seed (Quick only).
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the sorting algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the heap orientation (Heap only).
    pub fn orientation(mut self, orientation: HeapOrientation) -> Self {
        if self.orientation.is_some() {
            self.duplicate_param = Some("orientation");
        }
        self.orientation = Some(orientation);
        self
    }

    /// Set the pivot seed (Quick only).
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Sorter, SortkitError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(SortkitError::DuplicateParameter { parameter });
        }

        let algorithm = self.algorithm.unwrap_or_default();
        let sorter = match algorithm {
            Algorithm::Bubble => Sorter::Bubble(BubbleSort),
            Algorithm::Selection => Sorter::Selection(SelectionSort),
            Algorithm::Insertion => Sorter::Insertion(InsertionSort),
            Algorithm::TopDownMerge => Sorter::TopDownMerge(TopDownMergeSort),
            Algorithm::BottomUpMerge => Sorter::BottomUpMerge(BottomUpMergeSort),
            Algorithm::Quick => Sorter::Quick(QuickSort::with_seed(self.seed.unwrap_or(DEFAULT_SEED))),
            Algorithm::Heap => Sorter::Heap(HeapSort::new(self.orientation.unwrap_or_default())),
        };

        let name = SortingEngine::<i32>::name(&sorter);
        if self.orientation.is_some() && algorithm != Algorithm::Heap {
            return Err(unsupported(name, "Heap orientation"));
        }
        if self.seed.is_some() && algorithm != Algorithm::Quick {
            return Err(unsupported(name, "Pivot seed"));
        }
        Ok(sorter)
    }
}

/// A configured sorting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sorter {
    /// Bubble sort.
    Bubble(BubbleSort),
    /// Selection sort.
    Selection(SelectionSort),
    /// Insertion sort.
    Insertion(InsertionSort),
    /// Top-down merge sort.
    TopDownMerge(TopDownMergeSort),
    /// Bottom-up merge sort.
    BottomUpMerge(BottomUpMergeSort),
    /// Quicksort.
    Quick(QuickSort),
    /// Heapsort.
    Heap(HeapSort),
}

impl Sorter {
    fn engine<T: Ord + Clone>(&self) -> &dyn SortingEngine<T> {
        match self {
            Self::Bubble(engine) => engine,
            Self::Selection(engine) => engine,
            Self::Insertion(engine) => engine,
            Self::TopDownMerge(engine) => engine,
            Self::BottomUpMerge(engine) => engine,
            Self::Quick(engine) => engine,
            Self::Heap(engine) => engine,
        }
    }
}

impl<T: Ord + Clone> SortingEngine<T> for Sorter {
    fn name(&self) -> &'static str {
        self.engine::<T>().name()
    }

    fn is_stable(&self) -> bool {
        self.engine::<T>().is_stable()
    }

    fn sort(&self, data: &mut [T]) {
        self.engine().sort(data);
    }

    fn sort_list(&self, head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        self.engine().sort_list(head)
    }
}

// ============================================================================
// Order Statistics
// ============================================================================

/// Order-statistics strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// [`BruteForceMedianFinder`].
    BruteForce,
    /// [`PQMedianFinder`].
    PriorityQueue,
    /// [`QuickSelectMedianFinder`].
    #[default]
    QuickSelect,
}

/// Fluent builder for a [`Selector`].
#[derive(Debug, Clone, Default)]
pub struct MedianBuilder {
    /// Strategy to run (default: quickselect).
    pub strategy: Option<Strategy>,

    /// Pivot seed (QuickSelect only).
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MedianBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the order-statistics strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the pivot seed (QuickSelect only).
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Selector, SortkitError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(SortkitError::DuplicateParameter { parameter });
        }

        let strategy = self.strategy.unwrap_or_default();
        let selector = match strategy {
            Strategy::BruteForce => Selector::BruteForce(BruteForceMedianFinder),
            Strategy::PriorityQueue => Selector::PriorityQueue(PQMedianFinder),
            Strategy::QuickSelect => Selector::QuickSelect(QuickSelectMedianFinder::with_seed(
                self.seed.unwrap_or(DEFAULT_SEED),
            )),
        };

        if self.seed.is_some() && strategy != Strategy::QuickSelect {
            return Err(unsupported(MedianFinder::<i32>::name(&selector), "Pivot seed"));
        }
        Ok(selector)
    }
}

/// A configured order-statistics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Sort-then-index.
    BruteForce(BruteForceMedianFinder),
    /// Bounded heap.
    PriorityQueue(PQMedianFinder),
    /// Quickselect.
    QuickSelect(QuickSelectMedianFinder),
}

impl Selector {
    fn engine<T: Element>(&self) -> &dyn MedianFinder<T> {
        match self {
            Self::BruteForce(engine) => engine,
            Self::PriorityQueue(engine) => engine,
            Self::QuickSelect(engine) => engine,
        }
    }
}

impl<T: Element> MedianFinder<T> for Selector {
    fn name(&self) -> &'static str {
        self.engine::<T>().name()
    }

    fn find_kth_smallest(&self, data: &[T], k: usize) -> Result<T, SortkitError> {
        self.engine().find_kth_smallest(data, k)
    }
}

// ============================================================================
// Rotation
// ============================================================================

/// Rotation algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationMethod {
    /// [`ShiftRotation`].
    Shift,
    /// [`ReversalRotation`].
    #[default]
    Reversal,
    /// [`JugglingRotation`].
    Juggling,
    /// [`BlockSwapRotation`].
    BlockSwap,
}

/// Fluent builder for a [`Rotator`].
#[derive(Debug, Clone, Default)]
pub struct RotationBuilder {
    /// Rotation algorithm (default: reversal).
    pub method: Option<RotationMethod>,

    /// Direction used by [`Rotator::rotate_by`] (default: Left).
    pub direction: Option<Direction>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RotationBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the rotation algorithm.
    pub fn method(mut self, method: RotationMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the default direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Rotator, SortkitError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(SortkitError::DuplicateParameter { parameter });
        }

        let strategy = match self.method.unwrap_or_default() {
            RotationMethod::Shift => RotationStrategy::Shift(ShiftRotation),
            RotationMethod::Reversal => RotationStrategy::Reversal(ReversalRotation),
            RotationMethod::Juggling => RotationStrategy::Juggling(JugglingRotation),
            RotationMethod::BlockSwap => RotationStrategy::BlockSwap(BlockSwapRotation),
        };
        let rotator = Rotator {
            strategy,
            direction: self.direction.unwrap_or_default(),
        };

        // A default direction the strategy cannot honor is a configuration error.
        Validator::validate_direction(
            RotationEngine::<i32>::name(&rotator),
            rotator.direction,
            RotationEngine::<i32>::supports(&rotator, rotator.direction),
        )?;
        Ok(rotator)
    }
}

/// The strategy held by a [`Rotator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStrategy {
    /// Shift by one, `k` times.
    Shift(ShiftRotation),
    /// Three reversals.
    Reversal(ReversalRotation),
    /// Cycle following.
    Juggling(JugglingRotation),
    /// Block swapping.
    BlockSwap(BlockSwapRotation),
}

/// A configured rotation engine with a default direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    /// Selected strategy.
    pub strategy: RotationStrategy,

    /// Direction used by [`Rotator::rotate_by`].
    pub direction: Direction,
}

impl Rotator {
    fn engine<T>(&self) -> &dyn RotationEngine<T> {
        match &self.strategy {
            RotationStrategy::Shift(engine) => engine,
            RotationStrategy::Reversal(engine) => engine,
            RotationStrategy::Juggling(engine) => engine,
            RotationStrategy::BlockSwap(engine) => engine,
        }
    }

    /// Rotate `data` by `k` in the configured direction.
    pub fn rotate_by<T>(&self, data: &mut [T], k: usize) -> Result<(), SortkitError> {
        self.rotate(data, k, self.direction)
    }
}

impl<T> RotationEngine<T> for Rotator {
    fn name(&self) -> &'static str {
        self.engine::<T>().name()
    }

    fn supports(&self, direction: Direction) -> bool {
        self.engine::<T>().supports(direction)
    }

    fn rotate(&self, data: &mut [T], k: usize, direction: Direction) -> Result<(), SortkitError> {
        self.engine().rotate(data, k, direction)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn unsupported(algorithm: &'static str, operation: &'static str) -> SortkitError {
    SortkitError::UnsupportedOperation {
        algorithm,
        operation,
    }
}
