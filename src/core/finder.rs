use crate::domain::model::IndexPair;
use std::collections::HashMap;

/// Single left-to-right scan for two positions whose values add up to `target`.
///
/// Returns the first pair completed during the scan, which is not necessarily
/// the lexicographically smallest one when duplicates allow several answers.
/// Each value keeps the index where it was first seen.
pub fn find_pair(sequence: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(sequence.len());

    for (i, &value) in sequence.iter().enumerate() {
        // no i64 complement exists when the subtraction overflows
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&j) = seen.get(&complement) {
                tracing::debug!(first = j, second = i, complement, "pair found");
                return Some(IndexPair { first: j, second: i });
            }
        }
        seen.entry(value).or_insert(i);
    }

    tracing::debug!(scanned = sequence.len(), target, "no pair found");
    None
}
