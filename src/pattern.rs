use serde::{Deserialize, Serialize};

/// A mined sub-pattern: a sequence of `(bucket, item)` pairs together with
/// the number of distinct input sequences it occurs in.
///
/// The first element's bucket is always `0` (spec §3, the head-bucket-zero
/// invariant) — there is no bucket to its left to measure an offset from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub sequence: Vec<(i64, String)>,
    pub support: u64,
}
