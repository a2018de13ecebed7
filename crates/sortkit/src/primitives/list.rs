//! Singly-linked list nodes and list plumbing shared by the sorting algorithms.
//!
//! ## Purpose
//!
//! This module provides the owned singly-linked node type the list sorting
//! paths relink, a thin `LinkedList` wrapper that tracks length and acts as
//! the explicit "empty list" marker, and the splitting/merging/relinking
//! primitives the algorithms are built from.
//!
//! ## Design notes
//!
//! * **Iterative**: Construction, traversal, cloning, equality, formatting
//!   and dropping never recurse, so chains of hundreds of thousands of nodes
//!   are handled without growing the call stack.
//! * **Ownership**: Each node owns its successor; no node is shared between
//!   lists and cloning produces entirely new nodes.
//!
//! ## Invariants
//!
//! * `LinkedList::len` always equals the number of reachable nodes.
//! * Relinking helpers never drop or duplicate a node.
//!
//! ## Non-goals
//!
//! * Doubly-linked or cyclic structures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

// External dependencies
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::FusedIterator;

// ============================================================================
// Node
// ============================================================================

/// Owning link to the rest of a list; `None` marks the tail (or a null head).
pub type Link<T> = Option<Box<ListNode<T>>>;

/// A node of a singly-linked list.
pub struct ListNode<T> {
    /// Element stored in this node.
    pub value: T,

    /// Rest of the list.
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    /// Create a detached node.
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Build a chain from an iterator, preserving iteration order.
    pub fn chain<I>(values: I) -> Link<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut tail = &mut head;
        for value in values {
            tail = &mut tail.insert(Box::new(Self::new(value))).next;
        }
        head
    }

    /// Build a chain holding clones of `values`.
    pub fn from_slice(values: &[T]) -> Link<T>
    where
        T: Clone,
    {
        Self::chain(values.iter().cloned())
    }

    /// Number of nodes from this one to the tail.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over the values from this node to the tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: Some(self) }
    }

    /// Collect the values from this node to the tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Whether the values are in non-descending order.
    pub fn is_sorted(&self) -> bool
    where
        T: Ord,
    {
        let mut values = self.iter();
        let Some(mut previous) = values.next() else {
            return true;
        };
        for value in values {
            if previous > value {
                return false;
            }
            previous = value;
        }
        true
    }
}

impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ListNode<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            next: Self::chain(self.iter().skip(1).cloned()),
        }
    }
}

impl<T: PartialEq> PartialEq for ListNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ListNode<T> {}

impl<T: Debug> Debug for ListNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for ListNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Borrowing iterator over the values of a chain.
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// ============================================================================
// List Wrapper
// ============================================================================

/// A singly-linked list that knows its length.
///
/// An empty `LinkedList` is a valid value, unlike a null head; the sorting
/// engines reject it with [`SortkitError::EmptyList`](crate::prelude::SortkitError).
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Wrap an existing chain, counting its nodes.
    pub fn from_head(head: Link<T>) -> Self {
        let len = head.as_deref().map_or(0, ListNode::len);
        Self { head, len }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First node, if any.
    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    /// Prepend a value in O(1).
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(ListNode {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Detach the whole chain, leaving the list empty.
    pub fn take_head(&mut self) -> Link<T> {
        self.len = 0;
        self.head.take()
    }

    /// Replace the chain, recounting the length.
    pub fn set_head(&mut self, head: Link<T>) {
        *self = Self::from_head(head);
    }

    /// Iterate over the values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Collect the values.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_head(ListNode::chain(iter))
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============================================================================
// Relinking Primitives
// ============================================================================

/// Cut the chain after its first `n` nodes and return the remainder.
pub(crate) fn split_off<T>(head: &mut Link<T>, n: usize) -> Link<T> {
    let mut cursor = head;
    for _ in 0..n {
        match cursor {
            Some(node) => cursor = &mut node.next,
            None => return None,
        }
    }
    cursor.take()
}

/// Unlink and return the node at `index`.
pub(crate) fn unlink_at<T>(head: &mut Link<T>, index: usize) -> Link<T> {
    let mut cursor = head;
    for _ in 0..index {
        match cursor {
            Some(node) => cursor = &mut node.next,
            None => return None,
        }
    }
    let mut node = cursor.take()?;
    *cursor = node.next.take();
    Some(node)
}

/// Number of nodes that belong to the front half, found with a slow/fast walk.
///
/// The slow pointer advances one node per two fast steps; the front half
/// ends at the slow pointer, so an odd-length chain puts the extra node in
/// front.
pub(crate) fn front_half_len<T>(head: &ListNode<T>) -> usize {
    let mut slow_steps = 1;
    let mut fast = head.next.as_deref();
    while let Some(skip) = fast.and_then(|node| node.next.as_deref()) {
        slow_steps += 1;
        fast = skip.next.as_deref();
    }
    slow_steps
}

/// Merge two sorted chains into one without recursion.
///
/// Ties take from `left`, which keeps the merge stable.
pub(crate) fn merge_chains<T, F>(mut left: Link<T>, mut right: Link<T>, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut head = None;
    let mut tail = &mut head;
    loop {
        let take_right = match (&left, &right) {
            (Some(l), Some(r)) => compare(&r.value, &l.value) == Ordering::Less,
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = if left.is_some() { left } else { right };
    head
}

/// Detach every node of a chain into a buffer, preserving order.
pub(crate) fn detach<T>(mut head: Link<T>) -> Vec<Box<ListNode<T>>> {
    let mut nodes = Vec::new();
    while let Some(mut node) = head {
        head = node.next.take();
        nodes.push(node);
    }
    nodes
}

/// Relink buffered nodes in buffer order.
pub(crate) fn relink<T>(nodes: Vec<Box<ListNode<T>>>) -> Link<T> {
    let mut head = None;
    for mut node in nodes.into_iter().rev() {
        node.next = head;
        head = Some(node);
    }
    head
}
