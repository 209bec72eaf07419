//! FILENAME: dashboard-engine/src/aggregate.rs
//! PURPOSE: Generic grouping-reduce primitive shared by every derived view.
//! CONTEXT: The trend, distribution, and ranking views are all the same
//! computation with a different key function and accumulator. This module
//! owns that one computation so the views stay declarative.

use engine::SaleRecord;
use rustc_hash::{FxHashMap, FxHashSet};

/// Buckets records by a string key and folds each bucket into an accumulator.
///
/// Group order is the first-occurrence order of each key in the input, which
/// downstream views rely on for stable tie-breaks. Records for which `key_of`
/// returns `None` are skipped (this is how views exclude empty categorical
/// fields); every other record lands in exactly one group. An empty input
/// yields an empty mapping.
pub fn group_reduce<A, K, F>(records: &[SaleRecord], mut key_of: K, mut fold: F) -> Vec<(String, A)>
where
    A: Default,
    K: FnMut(&SaleRecord) -> Option<String>,
    F: FnMut(&mut A, &SaleRecord),
{
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<(String, A)> = Vec::new();

    for record in records {
        let key = match key_of(record) {
            Some(key) => key,
            None => continue,
        };
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                index.insert(key.clone(), slot);
                groups.push((key, A::default()));
                slot
            }
        };
        fold(&mut groups[slot].1, record);
    }

    groups
}

/// Collects the unique non-empty values of an iterator, first-occurrence
/// order. Used for the filter option lists.
pub fn unique_nonempty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut unique = Vec::new();
    for value in values {
        if !value.is_empty() && seen.insert(value) {
            unique.push(value.to_string());
        }
    }
    unique
}

// ============================================================================
// TESTS
// ============================================================================
