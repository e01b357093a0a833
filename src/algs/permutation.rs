//! In-place permutation by cycle following.
//!
//! A position array `pos` says where each element must go: the element
//! currently at `i` ends at `pos[i]`. Applying it walks each cycle of the
//! permutation with swaps, so no second copy of the items is ever made.

use crate::sort_error::SortError;

/// Move the element at `i` to `pos[i]` for every `i`.
///
/// Performs at most `items.len() - 1` swaps. `pos` is used as scratch and is
/// left as the identity permutation.
///
/// # Panics
/// If `pos` is shorter than `items` or holds an out-of-range target. Use
/// [`try_apply_permutation`] for unchecked input.
pub fn apply_permutation<T>(items: &mut [T], pos: &mut [usize]) {
    for i in 0..items.len() {
        while pos[i] != i {
            let j = pos[i];
            items.swap(i, j);
            pos.swap(i, j);
        }
    }
}

/// Checked variant of [`apply_permutation`].
///
/// # Errors
/// [`SortError::InvalidPermutation`] if the lengths differ, a target is out
/// of range, or two elements share a target. `items` and `pos` are untouched
/// on error.
pub fn try_apply_permutation<T>(items: &mut [T], pos: &mut [usize]) -> Result<(), SortError> {
    check_permutation(pos, items.len())?;
    apply_permutation(items, pos);
    Ok(())
}

/// Convert an emitted order into a position array.
///
/// `order[k]` is the original index of the element that belongs at `k`, so
/// afterwards `pos[order[k]] == k`.
pub fn order_to_positions(order: &[usize], pos: &mut [usize]) {
    for (k, &v) in order.iter().enumerate() {
        pos[v] = k;
    }
}

pub(crate) fn check_permutation(perm: &[usize], n: usize) -> Result<(), SortError> {
    if perm.len() != n {
        return Err(SortError::InvalidPermutation(format!(
            "expected {n} entries, got {}",
            perm.len()
        )));
    }
    let mut seen = vec![false; n];
    for (i, &p) in perm.iter().enumerate() {
        if p >= n {
            return Err(SortError::InvalidPermutation(format!(
                "entry {i} targets {p}, out of range for length {n}"
            )));
        }
        if std::mem::replace(&mut seen[p], true) {
            return Err(SortError::InvalidPermutation(format!(
                "duplicate target {p} at entry {i}"
            )));
        }
    }
    Ok(())
}
