//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by every engine:
//! the error vocabulary, the element model, the linked-list node type and
//! the seeded pivot source. It has zero internal dependencies within the
//! crate.
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
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Ordering policy for order-statistics elements.
pub mod element;

/// Singly-linked list nodes and relinking helpers.
pub mod list;

/// Seeded pivot selection.
pub mod rng;
