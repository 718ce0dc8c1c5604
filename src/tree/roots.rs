//! Full roots below a leaf boundary
//!
//! The leaves in [0, boundary) split into maximal complete subtrees,
//! one per set bit of boundary / 2, largest (leftmost) first.

use crate::{FlatTreeError, Result};

/// Roots of the complete subtrees that exactly tile `[0, boundary)`
///
/// `boundary` must be even (leaf-aligned). Returns an empty list for 0.
pub fn full_roots(boundary: u64) -> Result<Vec<u64>> {
    // boundary is even, so its set bits are exactly those of boundary / 2
    let mut roots = Vec::with_capacity(boundary.count_ones() as usize);
    full_roots_into(boundary, &mut roots)?;
    Ok(roots)
}

/// [`full_roots`] writing into a reusable buffer
///
/// The buffer is cleared before the roots are pushed. On error it is
/// left untouched.
pub fn full_roots_into(boundary: u64, roots: &mut Vec<u64>) -> Result<()> {
    if boundary & 1 != 0 {
        return Err(FlatTreeError::InvalidBoundary(boundary));
    }
    roots.clear();

    let mut remaining = boundary >> 1;
    let mut offset = 0u64;

    while remaining > 0 {
        // Largest power of two <= remaining leaves
        let factor = 1u64 << (u64::BITS - 1 - remaining.leading_zeros());
        roots.push(offset + factor - 1);
        offset += 2 * factor;
        remaining -= factor;
    }

    Ok(())
}
