//! # Core Type Definitions
//!
//! Shared types for the linkstack crate:
//! - Error types (`StackError`)
//!
//! ## Error Policy
//!
//! Reading the top of an empty stack is the only failure the crate models.
//! `peek` reports it as `StackError::Empty`; `pop` reports the same condition
//! as a plain `false`. Callers rely on this asymmetry, so it must not be
//! "harmonised" in either direction.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when reading a stack.
///
/// - Raised at the call site, never logged by the crate
/// - The stack is left untouched when an error is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// The stack holds no items, so there is no top to read.
    #[error("Stack is empty")]
    Empty,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_message() {
        assert_eq!(StackError::Empty.to_string(), "Stack is empty");
    }

    #[test]
    fn empty_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&StackError::Empty);
    }
}
