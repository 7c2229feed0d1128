//! Combining partial frequency tables

use crate::counter::FrequencyTable;

/// Sum two tables into a new one. Neither input is modified.
///
/// Counts add up for shared keys and first-seen keeps the earlier position,
/// so merging per-chunk tables in any order gives the single-pass table.
pub fn merge_counts(a: &FrequencyTable, b: &FrequencyTable) -> FrequencyTable {
    let (larger, smaller) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut merged = larger.clone();
    for (word, stat) in smaller.iter() {
        merged.add(word, *stat);
    }
    merged
}
