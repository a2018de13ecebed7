//! Error types for sorting, order-statistics and rotation operations.
//!
//! ## Purpose
//!
//! This module defines every error condition the engines can report,
//! from empty input and unsupported element types to out-of-range ranks
//! and operations a strategy refuses to perform.
//!
//! ## Design notes
//!
//! * **Stable messages**: The `Display` text of each variant is part of the
//!   public contract; callers and tests compare it verbatim.
//! * **Contextual**: Variants carry the offending values (rank, length,
//!   algorithm name) as fields, outside the message text.
//! * **No-std**: No allocation is needed to build or print an error.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty slices, null or empty lists.
//! 2. **Type policy**: Element types without a definite ordering policy.
//! 3. **Rank validation**: `k` outside `1..=len`, with a dedicated case for singletons.
//! 4. **Strategy constraints**: Directions or containers a strategy does not support.
//! 5. **Builder misuse**: Parameters configured more than once.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sortkit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortkitError {
    /// The input slice holds no elements.
    EmptyInput,

    /// The element type declines to provide an ordering policy (e.g. floating point).
    UnsupportedType {
        /// Rust type name of the rejected element type.
        type_name: &'static str,
    },

    /// The requested rank is zero; ranks are 1-indexed.
    RankTooSmall,

    /// A single-element slice only has rank 1.
    SingletonRank {
        /// The rank that was requested.
        k: usize,
    },

    /// The requested rank exceeds the number of elements.
    RankOutOfRange {
        /// The rank that was requested.
        k: usize,
        /// Number of elements in the input.
        len: usize,
    },

    /// A list head was `None` where a list was required.
    NullList,

    /// A `LinkedList` without nodes was supplied where a non-empty list was required.
    EmptyList,

    /// The selected strategy does not implement the requested operation.
    UnsupportedOperation {
        /// Name of the strategy (e.g., "Juggling").
        algorithm: &'static str,
        /// Name of the operation (e.g., "Right rotation").
        operation: &'static str,
    },

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortkitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Array is empty"),
            Self::UnsupportedType { .. } => {
                write!(f, "Input has data-type which is not supported yet")
            }
            Self::RankTooSmall => write!(f, "k must be at least 1"),
            Self::SingletonRank { .. } => {
                write!(f, "k can only be 1 for a single-element array")
            }
            Self::RankOutOfRange { .. } => write!(f, "k is higher than the highest index"),
            Self::NullList => write!(f, "List head is null"),
            Self::EmptyList => write!(f, "List is empty"),
            Self::UnsupportedOperation {
                algorithm,
                operation,
            } => {
                write!(f, "{operation} is not supported by the {algorithm} algorithm")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortkitError {}
