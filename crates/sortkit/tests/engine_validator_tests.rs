//! Tests for input validation.
//!
//! These tests verify the `Validator` checks shared by all engines:
//! - Order-statistics input (emptiness, element type)
//! - Rank bounds and their precedence
//! - List heads and list wrappers
//! - Rotation directions and amount reduction
//!
//! ## Test Organization
//!
//! 1. **Order Input** - Empty slices and declined element types
//! 2. **Rank Bounds** - Singleton, zero and out-of-range ranks
//! 3. **Lists** - Null heads and empty lists
//! 4. **Rotation** - Direction support and amount reduction

use sortkit::prelude::*;
use sortkit::{Link, Validator};

// ============================================================================
// Order Input Tests
// ============================================================================

/// Test a non-empty slice of a supported type.
///
/// Verifies validation passes.
#[test]
fn test_order_input_valid() {
    assert!(Validator::validate_order_input(&[1, 2, 3]).is_ok());
    assert!(Validator::validate_order_input(&["a"]).is_ok());
}

/// Test an empty slice.
///
/// Verifies `EmptyInput` is reported.
#[test]
fn test_order_input_empty() {
    let empty: [u16; 0] = [];
    assert_eq!(
        Validator::validate_order_input(&empty),
        Err(SortkitError::EmptyInput)
    );
}

/// Test a declined element type.
///
/// Verifies `UnsupportedType` carries the type name.
#[test]
fn test_order_input_unsupported_type() {
    let err = Validator::validate_order_input(&[0.5f64]).unwrap_err();
    match err {
        SortkitError::UnsupportedType { type_name } => {
            assert!(type_name.contains("f64"), "unexpected type name {type_name}");
        }
        other => panic!("expected UnsupportedType, got {other:?}"),
    }
}

/// Test the element families.
///
/// Verifies integers, text and floats are classified.
#[test]
fn test_element_kinds() {
    assert_eq!(<i32 as Element>::KIND, ElementKind::Integer);
    assert_eq!(<char as Element>::KIND, ElementKind::Text);
    assert_eq!(<String as Element>::KIND, ElementKind::Text);
    assert_eq!(<f32 as Element>::KIND, ElementKind::Unsupported);
}

// ============================================================================
// Rank Bound Tests
// ============================================================================

/// Test ranks inside the bounds.
///
/// Verifies 1 and `len` are accepted.
#[test]
fn test_rank_within_bounds() {
    assert!(Validator::validate_rank(1, 1).is_ok());
    assert!(Validator::validate_rank(10, 1).is_ok());
    assert!(Validator::validate_rank(10, 10).is_ok());
}

/// Test the singleton special case.
///
/// Verifies any rank other than 1 reports `SingletonRank`, including zero.
#[test]
fn test_rank_singleton() {
    assert_eq!(
        Validator::validate_rank(1, 2),
        Err(SortkitError::SingletonRank { k: 2 })
    );
    assert_eq!(
        Validator::validate_rank(1, 0),
        Err(SortkitError::SingletonRank { k: 0 })
    );
}

/// Test rank zero on longer slices.
///
/// Verifies `RankTooSmall` is reported.
#[test]
fn test_rank_zero() {
    assert_eq!(Validator::validate_rank(4, 0), Err(SortkitError::RankTooSmall));
}

/// Test a rank above the length.
///
/// Verifies `RankOutOfRange` carries `k` and the length.
#[test]
fn test_rank_too_large() {
    assert_eq!(
        Validator::validate_rank(4, 5),
        Err(SortkitError::RankOutOfRange { k: 5, len: 4 })
    );
}

/// Test precedence of the combined check.
///
/// Verifies emptiness wins over an invalid rank.
#[test]
fn test_selection_precedence() {
    let empty: [i32; 0] = [];
    assert_eq!(
        Validator::validate_selection(&empty, 0),
        Err(SortkitError::EmptyInput)
    );
    assert!(matches!(
        Validator::validate_selection(&[1.5f64, 2.5], 9),
        Err(SortkitError::UnsupportedType { .. })
    ));
}

// ============================================================================
// List Tests
// ============================================================================

/// Test a null list head.
///
/// Verifies `NullList` is reported.
#[test]
fn test_list_head_null() {
    let head: Link<i32> = None;
    assert_eq!(
        Validator::validate_list_head(head).unwrap_err(),
        SortkitError::NullList
    );
}

/// Test a present list head.
///
/// Verifies the node is handed back.
#[test]
fn test_list_head_present() {
    let node = Validator::validate_list_head(ListNode::chain([3, 4])).unwrap();
    assert_eq!(node.to_vec(), vec![3, 4]);
}

/// Test the list wrapper.
///
/// Verifies empty lists fail and non-empty lists pass.
#[test]
fn test_linked_list_emptiness() {
    let empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(
        Validator::validate_linked_list(&empty),
        Err(SortkitError::EmptyList)
    );

    let list: LinkedList<i32> = [1].into_iter().collect();
    assert!(Validator::validate_linked_list(&list).is_ok());
}

// ============================================================================
// Rotation Tests
// ============================================================================

/// Test direction validation.
///
/// Verifies the operation name follows the direction.
#[test]
fn test_direction_validation() {
    assert!(Validator::validate_direction("Shift", Right, true).is_ok());
    assert_eq!(
        Validator::validate_direction("BlockSwap", Right, false),
        Err(SortkitError::UnsupportedOperation {
            algorithm: "BlockSwap",
            operation: "Right rotation",
        })
    );
    assert_eq!(
        Validator::validate_direction("Mirror", Left, false)
            .unwrap_err()
            .to_string(),
        "Left rotation is not supported by the Mirror algorithm"
    );
}

/// Test rotation amount reduction.
///
/// Verifies `k mod len`, with zero for empty sequences.
#[test]
fn test_reduce_rotation() {
    assert_eq!(Validator::reduce_rotation(7, 9), 2);
    assert_eq!(Validator::reduce_rotation(7, 7), 0);
    assert_eq!(Validator::reduce_rotation(7, 3), 3);
    assert_eq!(Validator::reduce_rotation(0, 5), 0);
}
