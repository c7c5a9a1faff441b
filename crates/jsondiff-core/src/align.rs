//! Key alignment: the ordered union of two key sequences.

use std::collections::HashSet;

/// Merge two key sequences into one, each distinct key exactly once.
///
/// Keys from `left` come first in their original order, followed by the
/// keys only found in `right`, in `right`'s order. Duplicates inside either
/// input are dropped after their first occurrence.
pub fn align_keys<'a, L, R>(left: L, right: R) -> Vec<&'a str>
where
    L: IntoIterator<Item = &'a str>,
    R: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    left.into_iter()
        .chain(right)
        .filter(|key| seen.insert(*key))
        .collect()
}
