use std::collections::{HashMap, HashSet};

use crate::isdb::Isdb;
use crate::options::GispOptions;
use crate::pdb::Pdb;

/// A candidate `(bucket, item)` extension surfaced by the Counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub bucket: i64,
    pub item: String,
}

/// Computes each row's bucket by applying the caller-supplied itemizer to
/// its (already re-anchored) `interval`. Parallel to `pdb.rows`.
pub fn compute_buckets(pdb: &Pdb, itemize: &impl Fn(i64) -> i64) -> Vec<i64> {
    pdb.rows.iter().map(|row| itemize(row.interval)).collect()
}

/// Counts frequent `(bucket, item)` extensions at a recursion frame
/// (spec §4.3).
///
/// A row only contributes to a group if it satisfies all four interval
/// constraints; support is the number of *distinct sequences* (`sid`s) the
/// group occurs in, not the row count, so repeated occurrences within one
/// sequence collapse to a single vote.
pub fn count_extensions(pdb: &Pdb, buckets: &[i64], opts: &GispOptions) -> Vec<(Extension, u64)> {
    let mut groups: HashMap<(i64, &str), HashSet<usize>> = HashMap::new();
    for (row, &bucket) in pdb.rows.iter().zip(buckets) {
        if row.interval < opts.min_interval || row.interval > opts.max_interval {
            continue;
        }
        if row.whole_interval < opts.min_whole_interval || row.whole_interval > opts.max_whole_interval {
            continue;
        }
        groups.entry((bucket, row.item.as_str())).or_default().insert(row.sid);
    }
    groups
        .into_iter()
        .filter(|(_, sids)| sids.len() as u64 >= opts.min_support)
        .map(|((bucket, item), sids)| {
            (
                Extension { bucket, item: item.to_string() },
                sids.len() as u64,
            )
        })
        .collect()
}

/// Counts frequent single items directly over the ISDB (the implicit level-0
/// frame, spec §4.4): no bucket grouping (the head's bucket is always `0`)
/// and no interval constraints (those don't apply to the head).
pub fn count_seed(isdb: &Isdb, min_support: u64) -> Vec<(String, u64)> {
    let mut groups: HashMap<&str, HashSet<usize>> = HashMap::new();
    for row in &isdb.rows {
        groups.entry(row.item.as_str()).or_default().insert(row.sid);
    }
    groups
        .into_iter()
        .filter(|(_, sids)| sids.len() as u64 >= min_support)
        .map(|(item, sids)| (item.to_string(), sids.len() as u64))
        .collect()
}
