//! Layer 3: Statistics
//!
//! # Purpose
//!
//! This layer provides the order-statistics strategies: each returns the
//! k-th smallest element (1-indexed) of a slice without modifying it.
//!
//! - **Brute force**: copy, fully sort, index.
//! - **Priority queue**: bounded heap over the smaller side of the rank.
//! - **Quickselect**: iterative randomized partitioning.
//!
//! All three agree on every input; ranks are validated by the engine
//! layer, and an out-of-range rank yields `None` here.
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
//! Layer 3: Statistics ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sort-then-index selection.
pub mod brute_force;

/// Bounded-heap selection.
pub mod priority_queue;

/// Partition-based selection.
pub mod quickselect;
