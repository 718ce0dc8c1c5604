//! Path-based navigation
//!
//! A path from a root is one direction token per level.
//! Indices are recomputed from the root, nothing is stored per node.

use std::iter::FusedIterator;

use super::{checked_index, children_with_depth, depth, offset_with_depth, FlatNode};
use crate::Result;

/// Which child to descend into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Even offset, lower indices
    Left,

    /// Odd offset, higher indices
    Right,
}

impl Direction {
    /// Which child of its parent `idx` is
    pub fn of(idx: u64) -> Self {
        if super::is_left(idx) {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// Follow `path` down from `root`
///
/// Fails with `NoSuchChild` when a step starts at a leaf.
pub fn descend(root: u64, path: &[Direction]) -> Result<u64> {
    let mut node = root;
    let mut d = depth(root);

    for step in path {
        let (left, right) = children_with_depth(node, d)?;
        node = match step {
            Direction::Left => left,
            Direction::Right => right,
        };
        d -= 1;
    }

    Ok(node)
}

/// Directions leading from `root` down to `target`
///
/// Returns `None` when `target` is outside the subtree of `root`.
/// The root sits between its subtrees, so each step compares indices.
pub fn path_to(root: u64, target: u64) -> Option<Vec<Direction>> {
    let root_node = FlatNode::new(root);
    if !root_node.contains(target) {
        return None;
    }

    let levels = root_node.depth() - depth(target);
    let mut path = Vec::with_capacity(levels as usize);
    let mut node = root;
    let mut d = root_node.depth();

    while node != target {
        let (left, right) = children_with_depth(node, d).ok()?;
        if target < node {
            path.push(Direction::Left);
            node = left;
        } else {
            path.push(Direction::Right);
            node = right;
        }
        d -= 1;
    }

    Some(path)
}

/// Successive parents of an index, nearest first
///
/// Ends once the next parent is no longer representable in a `u64`.
pub fn ancestors(idx: u64) -> Ancestors {
    let d = depth(idx);
    Ancestors {
        depth: d,
        offset: offset_with_depth(idx, d),
    }
}

/// Iterator returned by [`ancestors`]
#[derive(Debug, Clone)]
pub struct Ancestors {
    depth: u32,
    offset: u64,
}

impl Iterator for Ancestors {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let depth = self.depth + 1;
        let offset = self.offset >> 1;

        // Position stays put once exhausted, so every later call is None too
        let idx = checked_index(depth, offset)?;
        self.depth = depth;
        self.offset = offset;
        Some(idx)
    }
}

impl FusedIterator for Ancestors {}
