//! # Node
//!
//! A single link in a singly-linked chain.
//!
//! A `Node` owns its item and, through [`Link`], the rest of the chain below
//! it. A node whose link is `None` is the bottom of its chain. Nodes carry no
//! behaviour beyond accessors; every chain invariant is maintained by the
//! owning [`LinkedStack`](crate::LinkedStack).

/// Owning link to the next node in a chain, or `None` at the bottom.
pub type Link<T> = Option<Box<Node<T>>>;

/// One element of a chain plus the link to the element below it.
#[derive(Debug)]
pub struct Node<T> {
    item: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Create a node holding `item` that links to `next`.
    #[must_use]
    pub const fn new(item: T, next: Link<T>) -> Self {
        Self { item, next }
    }

    /// Create a node with no successor.
    #[must_use]
    pub const fn bottom(item: T) -> Self {
        Self { item, next: None }
    }

    /// Borrow the stored item.
    #[must_use]
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Mutably borrow the stored item.
    pub fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    /// Replace the stored item, returning the previous one.
    pub fn set_item(&mut self, item: T) -> T {
        std::mem::replace(&mut self.item, item)
    }

    /// Borrow the next node, if any.
    #[must_use]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Mutably borrow the link to the next node.
    pub fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }

    /// Replace the link to the next node, returning the previous link.
    ///
    /// The returned link still owns whatever it pointed to; dropping it
    /// releases that part of the chain.
    pub fn set_next(&mut self, next: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.next, next)
    }

    /// Detach and return the rest of the chain, leaving this node at the bottom.
    pub fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    /// Consume the node and return its item.
    ///
    /// Any chain still linked below this node is dropped with it, so callers
    /// tearing down long chains should `take_next` first.
    #[must_use]
    pub fn into_item(self) -> T {
        self.item
    }

    /// True when no node follows this one.
    #[must_use]
    pub const fn is_bottom(&self) -> bool {
        self.next.is_none()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_node_has_no_next() {
        let node = Node::bottom(7);
        assert!(node.is_bottom());
        assert!(node.next().is_none());
        assert_eq!(*node.item(), 7);
    }

    #[test]
    fn set_item_returns_previous() {
        let mut node = Node::bottom(String::from("old"));
        let previous = node.set_item(String::from("new"));
        assert_eq!(previous, "old");
        assert_eq!(node.item(), "new");

        node.item_mut().push('!');
        assert_eq!(node.item(), "new!");
    }

    #[test]
    fn links_are_followed_and_replaced() {
        let below = Box::new(Node::bottom(1));
        let mut top = Node::new(2, Some(below));

        assert!(!top.is_bottom());
        assert_eq!(top.next().map(Node::item), Some(&1));

        let replaced = top.set_next(Some(Box::new(Node::bottom(3))));
        assert_eq!(replaced.map(|n| n.into_item()), Some(1));
        assert_eq!(top.next().map(Node::item), Some(&3));

        let detached = top.take_next();
        assert!(top.is_bottom());
        assert_eq!(detached.map(|n| n.into_item()), Some(3));
        assert_eq!(top.into_item(), 2);
    }
}
