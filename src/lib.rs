//! # Flat-tree addressing for append-only Merkle logs
//!
//! Maps every node of an infinite, complete binary tree onto one flat
//! sequence of non-negative integers. Leaves land on even indices,
//! internal nodes on odd ones, and nothing ever moves once placed.
//!
//! ```text
//!                 7
//!         3               11
//!     1       5       9       13
//!   0   2   4   6   8   10  12  14
//! ```
//!
//! ## Core Arithmetic
//!
//! 1. **Bijection**: `index(d, k) = (1 + 2k) * 2^d - 1`
//! 2. **Depth**: trailing one bits of the index
//! 3. **Offset**: `index >> (depth + 1)`
//!
//! Everything else (parents, children, spans, full roots) reduces to
//! a depth/offset computation followed by [`index`].
//!
//! ## Usage Example
//!
//! ```
//! use flat_tree::{children, full_roots, parent, spans};
//!
//! assert_eq!(parent(0), 1);
//! assert_eq!(children(3)?, (1, 5));
//! assert_eq!(spans(23), (16, 30));
//! assert_eq!(full_roots(20)?, vec![7, 17]);
//! # Ok::<(), flat_tree::FlatTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree; // Index arithmetic, navigation, spans and full roots

/// Python bindings for exposing flat-tree arithmetic to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use tree::{
    ancestors, checked_index, checked_parent, checked_sibling, checked_uncle, children,
    children_with_depth, count, count_with_depth, depth, descend, full_roots, full_roots_into, index, is_left, is_right, left_child,
    left_child_with_depth, left_span, left_span_with_depth, offset, offset_with_depth, parent,
    path_to, right_child, right_child_with_depth, right_span, right_span_with_depth, sibling,
    spans, spans_with_depth, two_pow, uncle, Ancestors, Direction, FlatNode, MAX_DEPTH,
};

use thiserror::Error;

/// Broad category of a [`FlatTreeError`]
///
/// Both kinds are caller precondition violations; neither is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument is outside the operation's domain
    InvalidArgument,
    /// The tree position cannot support the requested navigation
    InvalidState,
}

/// Errors produced by flat-tree arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlatTreeError {
    /// Full roots were requested for a boundary that is not leaf-aligned
    #[error("Full roots are only defined for even (leaf) boundaries, got {0}")]
    InvalidBoundary(u64),

    /// A child was requested from a leaf index
    #[error("Index {0} is a leaf and has no children")]
    NoSuchChild(u64),
}

impl FlatTreeError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlatTreeError::InvalidBoundary(_) => ErrorKind::InvalidArgument,
            FlatTreeError::NoSuchChild(_) => ErrorKind::InvalidState,
        }
    }
}

/// Result alias for fallible flat-tree operations
pub type Result<T> = std::result::Result<T, FlatTreeError>;
