//! Flat-tree index arithmetic
//!
//! Implicit representation: No tree is ever stored!
//! A node is just its position in the flat sequence, and every
//! relationship is recomputed from `(depth, offset)` on demand.
//!
//! Primitive layer (this file):
//!   depth(i)      = trailing one bits of i
//!   offset(i)     = i >> (depth + 1)
//!   index(d, k)   = (1 + 2k) * 2^d - 1
//!
//! Operations taking a depth hint come in two forms, `f(i)` and
//! `f_with_depth(i, depth)`. A hint of 0 means "derive it", so
//! `f_with_depth(i, 0) == f(i)` always holds.

mod navigation;
mod node;
mod roots;
mod span;
mod traversal;

pub use navigation::{
    checked_parent, checked_sibling, checked_uncle, children, children_with_depth, is_left,
    is_right, left_child, left_child_with_depth, parent, right_child, right_child_with_depth,
    sibling, uncle,
};
pub use node::FlatNode;
pub use roots::{full_roots, full_roots_into};
pub use span::{
    count, count_with_depth, left_span, left_span_with_depth, right_span, right_span_with_depth,
    spans, spans_with_depth,
};
pub use traversal::{ancestors, descend, path_to, Ancestors, Direction};

/// Deepest level whose `2^depth` fits in a `u64`
///
/// The single index `u64::MAX` reports depth 64; it has no representable
/// parent, span or count.
pub const MAX_DEPTH: u32 = u64::BITS - 1;

/// `2^n` for `n <= MAX_DEPTH`
#[inline]
pub fn two_pow(n: u32) -> u64 {
    debug_assert!(n <= MAX_DEPTH, "2^{} does not fit in u64", n);
    1u64 << n
}

/// Depth of an index: 0 for leaves, distance from the leaf level otherwise
///
/// Equals the 2-adic valuation of `idx + 1`, i.e. the number of
/// trailing one bits of `idx`.
#[inline]
pub fn depth(idx: u64) -> u32 {
    idx.trailing_ones()
}

/// Position of `idx` among all nodes sharing its depth
#[inline]
pub fn offset(idx: u64) -> u64 {
    offset_with_depth(idx, 0)
}

/// [`offset`] with a known depth (0 derives it)
pub fn offset_with_depth(idx: u64, depth: u32) -> u64 {
    if idx & 1 == 0 {
        return idx >> 1;
    }
    let depth = resolve_depth(idx, depth);

    // (idx + 1) / 2^depth is odd: 1 + 2k. Shifting one more bit drops the 1.
    idx.checked_shr(depth + 1).unwrap_or(0)
}

/// Flat index of the node at `(depth, offset)`
///
/// The single source of truth for every derived position. The result
/// must fit in a `u64`; use [`checked_index`] when that is not known.
#[inline]
pub fn index(depth: u32, offset: u64) -> u64 {
    debug_assert!(
        checked_index(depth, offset).is_some(),
        "index({}, {}) overflows u64",
        depth,
        offset
    );
    (1 + 2 * offset) * two_pow(depth) - 1
}

/// [`index`] returning `None` when the position is not representable
pub fn checked_index(depth: u32, offset: u64) -> Option<u64> {
    if depth > MAX_DEPTH {
        return None;
    }
    offset
        .checked_mul(2)?
        .checked_add(1)?
        .checked_mul(two_pow(depth))
        .map(|scaled| scaled - 1)
}

/// Resolve a depth hint, deriving the depth when the hint is 0
#[inline]
pub(crate) fn resolve_depth(idx: u64, hint: u32) -> u32 {
    if hint == 0 {
        depth(idx)
    } else {
        hint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        assert_eq!(index(0, 0), 0);
        assert_eq!(index(0, 1), 2);
        assert_eq!(index(0, 2), 4);
        assert_eq!(index(1, 0), 1);
        assert_eq!(index(1, 1), 5);
        assert_eq!(index(2, 0), 3);
        assert_eq!(index(3, 0), 7);
    }

    #[test]
    fn test_depth() {
        let expected = [0, 1, 0, 2, 0, 1, 0, 3, 0, 1];
        for (idx, want) in expected.iter().enumerate() {
            assert_eq!(depth(idx as u64), *want, "depth({})", idx);
        }
        assert_eq!(depth(u64::MAX), 64);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(0), 0);
        assert_eq!(offset(1), 0);
        assert_eq!(offset(2), 1);
        assert_eq!(offset(3), 0);
        assert_eq!(offset(4), 2);
        assert_eq!(offset(23), 1);
        assert_eq!(offset(27), 3);
    }

    #[test]
    fn test_depth_hint_matches_derived() {
        for idx in 0..1024u64 {
            let d = depth(idx);
            assert_eq!(offset_with_depth(idx, d), offset(idx), "offset({})", idx);
        }
    }

    #[test]
    fn test_checked_index_bounds() {
        assert_eq!(checked_index(MAX_DEPTH, 0), Some((1u64 << 63) - 1));
        assert_eq!(checked_index(MAX_DEPTH, 1), None);
        assert_eq!(checked_index(MAX_DEPTH + 1, 0), None);
        assert_eq!(checked_index(0, u64::MAX / 2), Some(u64::MAX - 1));
        assert_eq!(checked_index(0, u64::MAX), None);
    }

    #[test]
    fn test_deepest_offset() {
        let top = index(MAX_DEPTH, 0);
        assert_eq!(depth(top), MAX_DEPTH);
        assert_eq!(offset(top), 0);
    }
}
