//! Flat-tree node value
//!
//! Node = index plus its cached (depth, offset) coordinates
//! Navigation reuses the cached depth instead of re-deriving it.

use std::fmt;

use super::{children_with_depth, index, offset_with_depth, spans_with_depth};
use crate::Result;

/// Tree node (implicit - just an index with its coordinates)
///
/// Serializes as its bare flat index; the coordinates are re-derived on
/// deserialization so they always agree with the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u64", into = "u64")
)]
pub struct FlatNode {
    index: u64,
    depth: u32,
    offset: u64,
}

impl FlatNode {
    /// Node at flat index `idx`
    pub fn new(idx: u64) -> Self {
        let depth = super::depth(idx);
        Self {
            index: idx,
            depth,
            offset: offset_with_depth(idx, depth),
        }
    }

    /// Node at `(depth, offset)`
    pub fn at(depth: u32, offset: u64) -> Self {
        Self {
            index: index(depth, offset),
            depth,
            offset,
        }
    }

    /// Flat index
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Distance from the leaf level
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Position among nodes of the same depth
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Check if leaf (depth 0, even index)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.depth == 0
    }

    /// Parent node
    pub fn parent(&self) -> FlatNode {
        Self::at(self.depth + 1, self.offset >> 1)
    }

    /// Other child of the same parent
    pub fn sibling(&self) -> FlatNode {
        Self::at(self.depth, self.offset ^ 1)
    }

    /// Sibling of the parent
    pub fn uncle(&self) -> FlatNode {
        Self::at(self.depth + 1, (self.offset >> 1) ^ 1)
    }

    /// Get children via offset doubling
    ///
    /// Returns: (left, right), or `NoSuchChild` for a leaf
    pub fn children(&self) -> Result<(FlatNode, FlatNode)> {
        let (left, right) = children_with_depth(self.index, self.depth)?;
        let depth = self.depth - 1;
        let first = self.offset << 1;

        debug_assert_eq!(left, index(depth, first));
        debug_assert_eq!(right, index(depth, first + 1));
        Ok((
            FlatNode {
                index: left,
                depth,
                offset: first,
            },
            FlatNode {
                index: right,
                depth,
                offset: first + 1,
            },
        ))
    }

    /// Inclusive range of leaves covered by this subtree
    pub fn spans(&self) -> (u64, u64) {
        spans_with_depth(self.index, self.depth)
    }

    /// Number of indices in this subtree, root included
    pub fn count(&self) -> u64 {
        let (left, right) = self.spans();
        right - left + 1
    }

    /// Whether `idx` lies inside this subtree
    pub fn contains(&self, idx: u64) -> bool {
        let (left, right) = self.spans();
        (left..=right).contains(&idx)
    }
}

impl From<u64> for FlatNode {
    fn from(idx: u64) -> Self {
        FlatNode::new(idx)
    }
}

impl From<FlatNode> for u64 {
    fn from(node: FlatNode) -> Self {
        node.index
    }
}

impl fmt::Display for FlatNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}(d={}, o={})", self.index, self.depth, self.offset)
    }
}
