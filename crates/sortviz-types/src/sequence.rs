//! Order and multiset helpers for numeric sequences.
//!
//! Used by tests and callers to check the two structural guarantees a sort
//! run provides: a completed run is non-decreasing, and any run (completed
//! or cancelled) preserves the input multiset.

use std::collections::BTreeMap;

/// Whether the sequence is in non-decreasing order.
pub fn is_sorted(seq: &[u32]) -> bool {
    seq.windows(2).all(|pair| match pair {
        [a, b] => a <= b,
        _ => true,
    })
}

/// Whether two sequences contain the same elements with the same
/// multiplicities, regardless of order.
pub fn same_multiset(a: &[u32], b: &[u32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    counts(a) == counts(b)
}

/// Element -> occurrence count for a sequence.
fn counts(seq: &[u32]) -> BTreeMap<u32, u64> {
    let mut map = BTreeMap::new();
    for &value in seq {
        let entry = map.entry(value).or_insert(0u64);
        *entry = entry.saturating_add(1);
    }
    map
}
