//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the sorting algorithms themselves, each in two
//! shapes: a slice form sorting in place and a list form relinking (or
//! reordering the values of) a singly-linked chain. Every algorithm takes
//! an explicit comparator; the `Ord` conveniences live next to them.
//!
//! These are pure functions with no validation; the engine layer checks
//! inputs before calling them.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Rotation
//!   ↓
//! Layer 3: Statistics
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bubble sort.
pub mod bubble;

/// Selection sort.
pub mod selection;

/// Insertion sort.
pub mod insertion;

/// Top-down and bottom-up merge sort.
pub mod merge;

/// Randomized quicksort.
pub mod quick;

/// Heapsort with configurable heap orientation.
pub mod heap;

/// Pivot selection and three-way partitioning.
pub mod partition;
