//! # Linked Stack
//!
//! The LIFO stack for linkstack CORE.
//!
//! This module defines the `Stack` contract and implements it with
//! `LinkedStack`, which owns a chain of [`Node`]s through its top link.
//! Every node in the chain belongs to exactly one stack: cloning copies the
//! whole chain and dropping releases it iteratively, top to bottom.

use crate::{Link, Node, StackError};
use std::fmt;

// =============================================================================
// STACK TRAIT
// =============================================================================

/// The Stack trait defines the capability set every backing provides.
///
/// Emptiness is signalled two different ways: `pop` returns `false`,
/// `peek` returns `Err(StackError::Empty)`.
pub trait Stack<T> {
    /// True iff the stack holds no items.
    fn is_empty(&self) -> bool;

    /// Place `item` on top. Always returns `true`.
    fn push(&mut self, item: T) -> bool;

    /// Remove and drop the top item. Returns `false`, leaving the stack
    /// untouched, if there is nothing to remove.
    fn pop(&mut self) -> bool;

    /// Borrow the top item without removing it.
    fn peek(&self) -> Result<&T, StackError>;
}

// =============================================================================
// LINKED STACK IMPLEMENTATION
// =============================================================================

/// A stack built on singly-linked, exclusively owned nodes.
///
/// `top == None` exactly when the stack is empty. `len` mirrors the number of
/// nodes reachable from `top`.
pub struct LinkedStack<T> {
    /// Top of the chain.
    top: Link<T>,

    /// Number of nodes in the chain.
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Number of items on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True iff the stack holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Remove the top item and hand it back, or `None` if empty.
    pub fn pop_item(&mut self) -> Option<T> {
        let mut node = self.top.take()?;
        self.top = node.take_next();
        self.len = self.len.saturating_sub(1);
        Some(node.into_item())
    }

    /// Mutably borrow the top item.
    pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
        self.top
            .as_deref_mut()
            .map(Node::item_mut)
            .ok_or(StackError::Empty)
    }

    /// Release every node, top to bottom.
    ///
    /// Each node is unlinked before it is dropped, so the teardown depth is
    /// constant regardless of chain length.
    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.take_next();
        }
        self.len = 0;
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn is_empty(&self) -> bool {
        LinkedStack::is_empty(self)
    }

    fn push(&mut self, item: T) -> bool {
        let below = self.top.take();
        self.top = Some(Box::new(Node::new(item, below)));
        self.len += 1;
        true
    }

    fn pop(&mut self) -> bool {
        self.pop_item().is_some()
    }

    fn peek(&self) -> Result<&T, StackError> {
        self.top
            .as_deref()
            .map(Node::item)
            .ok_or(StackError::Empty)
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    /// Deep copy: the new chain has the same items in the same order and
    /// shares no allocation with `self`.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut tail = &mut copy.top;
        let mut cursor = self.top.as_deref();

        while let Some(node) = cursor {
            tail = tail
                .insert(Box::new(Node::bottom(node.item().clone())))
                .link_mut();
            cursor = node.next();
        }

        copy.len = self.len;
        copy
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    /// Push every item in order; the last item yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("len", &self.len)
            .field("top", &self.top.as_deref().map(Node::item))
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
