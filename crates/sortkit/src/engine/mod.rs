//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer turns the algorithm functions into interchangeable strategy
//! objects behind three contracts:
//!
//! - [`SortingEngine`](sorting::SortingEngine): sort a slice or a linked list.
//! - [`MedianFinder`](median::MedianFinder): k-th smallest, minimum, maximum and median.
//! - [`RotationEngine`](rotation::RotationEngine): rotate a slice left or right.
//!
//! Every strategy validates its input through the shared [`Validator`](validator::Validator)
//! before delegating to the lower layers. Strategies hold only configuration
//! (seeds, orientation), never per-call state.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Rotation
//!   ↓
//! Layer 3: Statistics
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Sorting strategies.
pub mod sorting;

/// Order-statistics strategies.
pub mod median;

/// Rotation strategies.
pub mod rotation;
