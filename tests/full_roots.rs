//! Full-root tiling tests
//!
//! Verifies that full roots cover every leaf below the boundary exactly once

use bitvec::prelude::*;
use flat_tree::{count, full_roots, full_roots_into, spans, FlatTreeError};
use proptest::prelude::*;

/// Mark every index covered by the roots' spans, failing on overlap
fn coverage(roots: &[u64], boundary: u64) -> BitVec {
    let mut covered = bitvec![0; boundary as usize];
    for &root in roots {
        let (left, right) = spans(root);
        for idx in left..=right {
            assert!(!covered[idx as usize], "index {} covered twice", idx);
            covered.set(idx as usize, true);
        }
    }
    covered
}

#[test]
fn test_roots_tile_small_boundaries() {
    for boundary in (0..=512u64).step_by(2) {
        let roots = full_roots(boundary).expect("even boundary");
        let covered = coverage(&roots, boundary);

        // Every leaf below the boundary sits under exactly one root. The
        // internal nodes joining neighbouring roots belong to no root.
        assert!(
            (0..boundary).step_by(2).all(|leaf| covered[leaf as usize]),
            "boundary {} leaves a leaf uncovered",
            boundary
        );
        let total: u64 = roots.iter().map(|&root| count(root)).sum();
        assert_eq!(covered.count_ones() as u64, total, "boundary {}", boundary);
    }
}

#[test]
fn test_joining_nodes_belong_to_no_root() {
    let roots = full_roots(6).expect("even boundary");
    assert_eq!(roots, vec![1, 4]);

    let covered = coverage(&roots, 6);
    assert_eq!(covered.count_ones(), 4);
    assert!(!covered[3], "index 3 joins the two roots");

    let roots = full_roots(18).expect("even boundary");
    assert_eq!(roots, vec![7, 16]);
    assert!(!coverage(&roots, 18)[15]);
}

#[test]
fn test_roots_follow_set_bits() {
    for boundary in (0..=4096u64).step_by(2) {
        let roots = full_roots(boundary).expect("even boundary");
        assert_eq!(roots.len() as u32, (boundary / 2).count_ones());

        for pair in roots.windows(2) {
            assert!(
                count(pair[0]) > count(pair[1]),
                "roots {:?} not strictly decreasing for boundary {}",
                pair,
                boundary
            );
        }
    }
}

#[test]
fn test_power_of_two_boundary_is_one_root() {
    for shift in 1..40u32 {
        let boundary = 1u64 << shift;
        let roots = full_roots(boundary).expect("even boundary");
        assert_eq!(roots, vec![(1u64 << (shift - 1)) - 1]);
        assert_eq!(spans(roots[0]), (0, boundary - 2));
    }
}

#[test]
fn test_every_odd_boundary_fails() {
    let mut buffer = vec![1, 2, 3];
    for boundary in (1..200u64).step_by(2) {
        assert_eq!(
            full_roots(boundary),
            Err(FlatTreeError::InvalidBoundary(boundary))
        );
        assert!(full_roots_into(boundary, &mut buffer).is_err());
    }
    assert_eq!(buffer, vec![1, 2, 3]);
}

proptest! {
    #[test]
    fn roots_are_contiguous(half in 0u64..(1u64 << 40)) {
        let boundary = half * 2;
        let roots = full_roots(boundary).expect("even boundary");

        let mut next_leaf = 0u64;
        for &root in &roots {
            let (left, right) = spans(root);
            prop_assert_eq!(left, next_leaf, "gap or overlap before root {}", root);
            next_leaf = right + 2;
        }
        prop_assert_eq!(next_leaf, boundary);
    }

    #[test]
    fn buffer_variant_matches(half in 0u64..(1u64 << 40), junk in proptest::collection::vec(any::<u64>(), 0..8)) {
        let mut buffer = junk;
        full_roots_into(half * 2, &mut buffer).expect("even boundary");
        prop_assert_eq!(buffer, full_roots(half * 2).expect("even boundary"));
    }
}
