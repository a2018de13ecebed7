//! Input validation shared by every engine.
//!
//! ## Purpose
//!
//! This module centralizes the checks the engines perform before running
//! an algorithm: non-empty data, supported element types, ranks within
//! bounds, non-null and non-empty lists, and supported rotation directions.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Checks run from the most to the least fundamental:
//!   emptiness, then element type, then rank.
//! * **Side-effect free**: Validators only inspect their arguments.
//!
//! ## Non-goals
//!
//! * This module does not clamp or repair invalid input, except for
//!   reducing rotation amounts modulo the length.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::errors::SortkitError;
use crate::primitives::list::{Link, LinkedList, ListNode};
use crate::rotation::Direction;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine inputs.
///
/// Provides static methods that return `Result<_, SortkitError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Order Statistics
    // ========================================================================

    /// Validate data for an order-statistics query.
    pub fn validate_order_input<T: Element>(data: &[T]) -> Result<(), SortkitError> {
        // Check 1: Non-empty
        if data.is_empty() {
            return Err(SortkitError::EmptyInput);
        }

        // Check 2: The element type has an ordering policy
        if !T::is_supported() {
            return Err(SortkitError::UnsupportedType {
                type_name: core::any::type_name::<T>(),
            });
        }

        Ok(())
    }

    /// Validate a 1-indexed rank against the number of elements.
    pub fn validate_rank(len: usize, k: usize) -> Result<(), SortkitError> {
        if len == 1 && k != 1 {
            return Err(SortkitError::SingletonRank { k });
        }
        if k == 0 {
            return Err(SortkitError::RankTooSmall);
        }
        if k > len {
            return Err(SortkitError::RankOutOfRange { k, len });
        }
        Ok(())
    }

    /// Validate both the data and the rank of a k-th smallest query.
    pub fn validate_selection<T: Element>(data: &[T], k: usize) -> Result<(), SortkitError> {
        Self::validate_order_input(data)?;
        Self::validate_rank(data.len(), k)
    }

    // ========================================================================
    // Lists
    // ========================================================================

    /// Require a non-null list head.
    pub fn validate_list_head<T>(head: Link<T>) -> Result<Box<ListNode<T>>, SortkitError> {
        head.ok_or(SortkitError::NullList)
    }

    /// Require a list with at least one node.
    pub fn validate_linked_list<T>(list: &LinkedList<T>) -> Result<(), SortkitError> {
        if list.is_empty() {
            return Err(SortkitError::EmptyList);
        }
        Ok(())
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    /// Require that a strategy supports the requested direction.
    pub fn validate_direction(
        algorithm: &'static str,
        direction: Direction,
        supported: bool,
    ) -> Result<(), SortkitError> {
        if !supported {
            return Err(SortkitError::UnsupportedOperation {
                algorithm,
                operation: direction.operation(),
            });
        }
        Ok(())
    }

    /// Reduce a rotation amount modulo the length; zero for empty input.
    pub fn reduce_rotation(len: usize, k: usize) -> usize {
        if len == 0 { 0 } else { k % len }
    }
}
