//! Parent, sibling and child derivation
//!
//! Children of the node at (d, k) sit at (d-1, 2k) and (d-1, 2k+1).
//! The parent is at (d+1, k/2); both siblings collapse onto it.

use super::{checked_index, depth, index, offset, offset_with_depth, resolve_depth};
use crate::{FlatTreeError, Result};

/// Index of the parent node
pub fn parent(idx: u64) -> u64 {
    let d = depth(idx);
    index(d + 1, offset_with_depth(idx, d) >> 1)
}

/// Index of the other child of this node's parent
pub fn sibling(idx: u64) -> u64 {
    let d = depth(idx);
    index(d, offset_with_depth(idx, d) ^ 1)
}

/// Index of the parent's sibling
pub fn uncle(idx: u64) -> u64 {
    let d = depth(idx);
    index(d + 1, (offset_with_depth(idx, d) >> 1) ^ 1)
}

/// [`parent`] returning `None` when the parent does not fit in a `u64`
pub fn checked_parent(idx: u64) -> Option<u64> {
    let d = depth(idx);
    checked_index(d + 1, offset_with_depth(idx, d) >> 1)
}

/// [`sibling`] returning `None` when the sibling does not fit in a `u64`
pub fn checked_sibling(idx: u64) -> Option<u64> {
    let d = depth(idx);
    checked_index(d, offset_with_depth(idx, d) ^ 1)
}

/// [`uncle`] returning `None` when the uncle does not fit in a `u64`
pub fn checked_uncle(idx: u64) -> Option<u64> {
    let d = depth(idx);
    checked_index(d + 1, (offset_with_depth(idx, d) >> 1) ^ 1)
}

/// Whether `idx` is the left child of its parent
#[inline]
pub fn is_left(idx: u64) -> bool {
    offset(idx) & 1 == 0
}

/// Whether `idx` is the right child of its parent
#[inline]
pub fn is_right(idx: u64) -> bool {
    !is_left(idx)
}

/// Index of the left child; leaves have none
pub fn left_child(idx: u64) -> Result<u64> {
    left_child_with_depth(idx, 0)
}

/// [`left_child`] with a known depth (0 derives it)
pub fn left_child_with_depth(idx: u64, depth: u32) -> Result<u64> {
    child_with_depth(idx, depth, 0)
}

/// Index of the right child; leaves have none
pub fn right_child(idx: u64) -> Result<u64> {
    right_child_with_depth(idx, 0)
}

/// [`right_child`] with a known depth (0 derives it)
pub fn right_child_with_depth(idx: u64, depth: u32) -> Result<u64> {
    child_with_depth(idx, depth, 1)
}

/// `(left_child, right_child)` of an internal node
pub fn children(idx: u64) -> Result<(u64, u64)> {
    children_with_depth(idx, 0)
}

/// [`children`] with a known depth (0 derives it)
///
/// Both children come from one offset computation, so they always
/// form a sibling pair even if a caller passes the wrong depth.
pub fn children_with_depth(idx: u64, depth: u32) -> Result<(u64, u64)> {
    if idx & 1 == 0 {
        return Err(FlatTreeError::NoSuchChild(idx));
    }
    let d = resolve_depth(idx, depth);
    let first = offset_with_depth(idx, d) << 1;

    Ok((index(d - 1, first), index(d - 1, first + 1)))
}

fn child_with_depth(idx: u64, depth: u32, side: u64) -> Result<u64> {
    if idx & 1 == 0 {
        return Err(FlatTreeError::NoSuchChild(idx));
    }
    let d = resolve_depth(idx, depth);

    Ok(index(d - 1, (offset_with_depth(idx, d) << 1) + side))
}
