//! Subtree range queries
//!
//! A depth-d subtree covers 2^(d+1) - 1 contiguous indices, from its
//! leftmost leaf to its rightmost leaf, with the root in the middle.
//! Widths are computed as 2 * (2^d - 1) so that depth 63 stays in range.

use super::{offset_with_depth, resolve_depth, two_pow};

/// Leftmost leaf covered by the subtree rooted at `idx`
pub fn left_span(idx: u64) -> u64 {
    left_span_with_depth(idx, 0)
}

/// [`left_span`] with a known depth (0 derives it)
pub fn left_span_with_depth(idx: u64, depth: u32) -> u64 {
    spans_with_depth(idx, depth).0
}

/// Rightmost leaf covered by the subtree rooted at `idx`
pub fn right_span(idx: u64) -> u64 {
    right_span_with_depth(idx, 0)
}

/// [`right_span`] with a known depth (0 derives it)
pub fn right_span_with_depth(idx: u64, depth: u32) -> u64 {
    spans_with_depth(idx, depth).1
}

/// Inclusive `(left_span, right_span)` of the subtree rooted at `idx`
pub fn spans(idx: u64) -> (u64, u64) {
    spans_with_depth(idx, 0)
}

/// [`spans`] with a known depth (0 derives it)
pub fn spans_with_depth(idx: u64, depth: u32) -> (u64, u64) {
    if idx & 1 == 0 {
        return (idx, idx);
    }
    let d = resolve_depth(idx, depth);

    // offset * 2^(d+1), the first leaf of the subtree
    let left = offset_with_depth(idx, d) * two_pow(d) * 2;
    (left, left + leaf_distance(d))
}

/// Number of indices (leaves and internal nodes) under `idx`, inclusive
pub fn count(idx: u64) -> u64 {
    count_with_depth(idx, 0)
}

/// [`count`] with a known depth (0 derives it)
pub fn count_with_depth(idx: u64, depth: u32) -> u64 {
    if idx & 1 == 0 {
        return 1;
    }
    leaf_distance(resolve_depth(idx, depth)) + 1
}

/// Distance between the outermost leaves of a depth-d subtree
#[inline]
fn leaf_distance(d: u32) -> u64 {
    (two_pow(d) - 1) * 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{depth, index, MAX_DEPTH};

    #[test]
    fn test_spans() {
        assert_eq!(spans(0), (0, 0));
        assert_eq!(spans(1), (0, 2));
        assert_eq!(spans(3), (0, 6));
        assert_eq!(spans(23), (16, 30));
        assert_eq!(spans(27), (24, 30));
    }

    #[test]
    fn test_left_and_right_span() {
        assert_eq!(left_span(0), 0);
        assert_eq!(left_span(1), 0);
        assert_eq!(left_span(3), 0);
        assert_eq!(left_span(23), 16);
        assert_eq!(left_span(27), 24);

        assert_eq!(right_span(0), 0);
        assert_eq!(right_span(1), 2);
        assert_eq!(right_span(3), 6);
        assert_eq!(right_span(23), 30);
        assert_eq!(right_span(27), 30);
    }

    #[test]
    fn test_count() {
        assert_eq!(count(0), 1);
        assert_eq!(count(1), 3);
        assert_eq!(count(3), 7);
        assert_eq!(count(5), 3);
        assert_eq!(count(23), 15);
        assert_eq!(count(27), 7);
    }

    #[test]
    fn test_deepest_subtree_fits() {
        let top = index(MAX_DEPTH, 0);
        assert_eq!(spans(top), (0, u64::MAX - 1));
        assert_eq!(count(top), u64::MAX);
    }

    #[test]
    fn test_depth_hint_matches_derived() {
        for idx in 0..2048u64 {
            let d = depth(idx);
            assert_eq!(spans_with_depth(idx, d), spans(idx));
            assert_eq!(count_with_depth(idx, d), count(idx));
            assert_eq!(left_span_with_depth(idx, d), left_span(idx));
            assert_eq!(right_span_with_depth(idx, d), right_span(idx));
        }
    }
}
