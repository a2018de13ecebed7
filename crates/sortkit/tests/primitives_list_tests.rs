//! Tests for the singly-linked list types.
//!
//! These tests verify `ListNode` and `LinkedList`:
//! - Construction from slices and iterators
//! - Iterative traversal, cloning, equality and formatting
//! - Length tracking of the `LinkedList` wrapper
//! - Dropping very long chains
//!
//! ## Test Organization
//!
//! 1. **Construction** - `chain`, `from_slice`, `FromIterator`
//! 2. **Traversal** - `iter`, `len`, `to_vec`, `is_sorted`
//! 3. **Trait Implementations** - `Clone`, `PartialEq`, `Debug`, `Display`
//! 4. **LinkedList Wrapper** - Head manipulation and length bookkeeping
//! 5. **Long Chains** - Operations on 200,000-node lists

use sortkit::prelude::*;
use sortkit::Link;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test building a chain from an iterator.
///
/// Verifies iteration order is preserved.
#[test]
fn test_chain_preserves_order() {
    let head = ListNode::chain([1, 2, 3]).unwrap();
    assert_eq!(head.value, 1);
    assert_eq!(head.to_vec(), vec![1, 2, 3]);
}

/// Test building an empty chain.
///
/// Verifies an empty iterator yields a null head.
#[test]
fn test_chain_empty_is_null() {
    let head: Link<i32> = ListNode::chain(Vec::new());
    assert!(head.is_none());
}

/// Test building from a slice.
///
/// Verifies values are cloned and the slice is untouched.
#[test]
fn test_from_slice() {
    let values = vec![String::from("x"), String::from("y")];
    let head = ListNode::from_slice(&values).unwrap();
    assert_eq!(head.to_vec(), values);
}

/// Test a detached node.
///
/// Verifies `new` creates a one-element chain.
#[test]
fn test_new_node() {
    let node = ListNode::new(7);
    assert_eq!(node.len(), 1);
    assert!(node.next.is_none());
}

// ============================================================================
// Traversal Tests
// ============================================================================

/// Test iteration and length.
///
/// Verifies `iter` visits every node once and is fused.
#[test]
fn test_iter_and_len() {
    let head = ListNode::chain(10..15).unwrap();
    assert_eq!(head.len(), 5);

    let mut iter = head.iter();
    assert_eq!(iter.by_ref().copied().sum::<i32>(), 60);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

/// Test the sortedness check.
///
/// Verifies non-descending chains with duplicates count as sorted.
#[test]
fn test_is_sorted() {
    assert!(ListNode::chain([1, 1, 2, 5]).unwrap().is_sorted());
    assert!(ListNode::chain([4]).unwrap().is_sorted());
    assert!(!ListNode::chain([1, 3, 2]).unwrap().is_sorted());
}

// ============================================================================
// Trait Implementation Tests
// ============================================================================

/// Test cloning.
///
/// Verifies the clone is equal but owns separate nodes.
#[test]
fn test_clone_is_deep() {
    let original = ListNode::chain([1, 2, 3]).unwrap();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    if let Some(second) = copy.next.as_mut() {
        second.value = 20;
    }
    assert_eq!(original.to_vec(), vec![1, 2, 3]);
    assert_eq!(copy.to_vec(), vec![1, 20, 3]);
    assert_ne!(copy, original);
}

/// Test equality over different lengths.
///
/// Verifies a prefix is not equal to the longer chain.
#[test]
fn test_equality_length_sensitive() {
    let short = ListNode::chain([1, 2]).unwrap();
    let long = ListNode::chain([1, 2, 3]).unwrap();
    assert_ne!(short, long);
}

/// Test formatting.
///
/// Verifies `Display` joins values with arrows and `Debug` prints a list.
#[test]
fn test_formatting() {
    let head = ListNode::chain([1, 2, 3]).unwrap();
    assert_eq!(head.to_string(), "1 -> 2 -> 3");
    assert_eq!(format!("{head:?}"), "[1, 2, 3]");

    let list: LinkedList<char> = "ab".chars().collect();
    assert_eq!(format!("{list:?}"), "['a', 'b']");
}

// ============================================================================
// LinkedList Wrapper Tests
// ============================================================================

/// Test an empty list.
///
/// Verifies length, emptiness and the missing head.
#[test]
fn test_linked_list_empty() {
    let list: LinkedList<i32> = LinkedList::default();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.head().is_none());
    assert_eq!(list, LinkedList::new());
}

/// Test pushing to the front.
///
/// Verifies order and length after each push.
#[test]
fn test_linked_list_push_front() {
    let mut list = LinkedList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.head().map(|node| node.value), Some(1));
}

/// Test taking and replacing the head.
///
/// Verifies the length follows the chain.
#[test]
fn test_linked_list_take_and_set_head() {
    let mut list: LinkedList<i32> = (1..=4).collect();
    let head = list.take_head();
    assert!(list.is_empty());
    assert_eq!(head.as_deref().map(ListNode::len), Some(4));

    list.set_head(ListNode::chain([9, 8]));
    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 8]);

    let wrapped = LinkedList::from_head(ListNode::chain([5, 6, 7]));
    assert_eq!(wrapped.len(), 3);
}

/// Test cloning the wrapper.
///
/// Verifies equality and length of the clone.
#[test]
fn test_linked_list_clone() {
    let list: LinkedList<i32> = [4, 5].into_iter().collect();
    let copy = list.clone();
    assert_eq!(copy, list);
    assert_eq!(copy.len(), 2);
}

// ============================================================================
// Long Chain Tests
// ============================================================================

/// Test very long chains.
///
/// Verifies construction, clone, equality, formatting length and drop do not
/// recurse per node.
#[test]
fn test_long_chain_operations() {
    const LEN: usize = 200_000;
    let head = ListNode::chain(0..LEN).unwrap();
    assert_eq!(head.len(), LEN);

    let copy = head.clone();
    assert_eq!(copy, head);
    assert!(copy.is_sorted());

    let rendered = head.to_string();
    assert!(rendered.starts_with("0 -> 1 -> 2"));
    assert!(rendered.ends_with("199999"));

    drop(copy);
    drop(head);
}
