//! Digest deduplication for reference lists.

use std::collections::HashSet;

use super::TxReference;

/// Returns each distinct digest of `refs` once, in order of first occurrence.
///
/// The reference half of each pair is ignored: two entries pointing at the
/// same transaction through different objects collapse into one link.
#[must_use]
pub fn dedup_digests(refs: &[TxReference]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(refs.len());
    refs.iter()
        .filter(|r| seen.insert(r.digest.as_str()))
        .map(|r| r.digest.clone())
        .collect()
}
