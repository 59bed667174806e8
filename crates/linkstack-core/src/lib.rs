//! # linkstack-core
//!
//! A generic LIFO stack on singly-linked nodes - THE LOGIC.
//!
//! The crate is a single data structure behind a single contract:
//! - [`Node`]: one item plus the owning link to the node below it
//! - [`LinkedStack`]: owns a chain of nodes through its top link
//! - [`Stack`]: the capability set {is_empty, push, pop, peek}
//! - [`VecStack`]: an alternative backing for the same contract
//!
//! ## Ownership
//!
//! Every node is owned by exactly one stack. Cloning a `LinkedStack` copies
//! the entire chain; dropping one releases it node by node without recursion.
//! No API hands out a reference to a node held by a stack.
//!
//! ## Architectural Constraints
//!
//! - NO I/O, NO logging, NO async (pure Rust)
//! - One domain error: [`StackError::Empty`] from `peek`

// =============================================================================
// MODULES
// =============================================================================

pub mod node;
pub mod stack;
pub mod types;
pub mod vec_stack;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use node::{Link, Node};
pub use stack::{LinkedStack, Stack};
pub use types::StackError;
pub use vec_stack::VecStack;
