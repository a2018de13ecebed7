//! Element model for order statistics.
//!
//! ## Purpose
//!
//! Sorting engines only need `Ord`. The order-statistics engines are
//! stricter: they work on element families with a definite ordering
//! policy and refuse the rest with a stable error. This module declares
//! that policy per type.
//!
//! ## Design notes
//!
//! * **Compile-time policy**: The family is an associated constant, so the
//!   check costs nothing at runtime beyond a constant comparison.
//! * **Declined types**: `f32` and `f64` implement [`Element`] with
//!   [`ElementKind::Unsupported`] so that they can be passed in and
//!   rejected with a clear message instead of a compile error.
//!
//! ## Invariants
//!
//! * For every supported type, `compare` is a total order consistent with `Ord`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String};

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Element Families
// ============================================================================

/// Family of an element type, as seen by the order-statistics engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Fixed-width integers, ordered numerically.
    Integer,

    /// Characters and strings, ordered lexicographically.
    Text,

    /// No ordering policy is provided for this type.
    Unsupported,
}

/// An element the order-statistics engines can rank.
pub trait Element: Clone {
    /// Ordering family of this type.
    const KIND: ElementKind;

    /// Compare two elements under the family's ordering policy.
    fn compare(&self, other: &Self) -> Ordering;

    /// Whether this type provides a definite ordering policy.
    fn is_supported() -> bool {
        Self::KIND != ElementKind::Unsupported
    }
}

// ============================================================================
// Implementations
// ============================================================================

macro_rules! ordered_element {
    ($kind:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = $kind;

                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

ordered_element!(ElementKind::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
ordered_element!(ElementKind::Text => char, String, Box<str>);

impl Element for &str {
    const KIND: ElementKind = ElementKind::Text;

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

macro_rules! declined_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = ElementKind::Unsupported;

                // Never consulted by the engines; validation rejects the type first.
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )+
    };
}

declined_element!(f32, f64);
