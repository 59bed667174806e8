//! # Vector Stack
//!
//! A contiguous-buffer backing for the [`Stack`] contract.
//!
//! Semantically interchangeable with [`LinkedStack`](crate::LinkedStack);
//! callers written against `Stack<T>` can swap one for the other.

use crate::{Stack, StackError};

/// A stack whose items live in a `Vec`, top at the end.
#[derive(Debug, Clone, Default)]
pub struct VecStack<T> {
    items: Vec<T>,
}

impl<T> VecStack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove the top item and hand it back, or `None` if empty.
    pub fn pop_item(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Stack<T> for VecStack<T> {
    fn is_empty(&self) -> bool {
        VecStack::is_empty(self)
    }

    fn push(&mut self, item: T) -> bool {
        self.items.push(item);
        true
    }

    fn pop(&mut self) -> bool {
        self.items.pop().is_some()
    }

    fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }
}

impl<T> FromIterator<T> for VecStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_is_last_pushed() {
        let mut stack = VecStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn empty_signals_match_linked_backing() {
        let mut stack: VecStack<u32> = VecStack::new();
        assert!(!stack.pop());
        assert_eq!(stack.peek(), Err(StackError::Empty));
        assert_eq!(stack.pop_item(), None);
    }

    #[test]
    fn collect_puts_last_item_on_top() {
        let mut stack: VecStack<_> = "abc".chars().collect();
        assert_eq!(stack.pop_item(), Some('c'));
        stack.clear();
        assert!(stack.is_empty());
    }
}
