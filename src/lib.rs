//! Generalized Interval-extended Sequence Pattern (GISP) mining.
//!
//! Flattens per-sequence itemset lists into an interval-extended sequence
//! database (ISDB), then recursively projects, counts and extends frequent
//! sub-patterns via prefix-projection — the same shape as PrefixSpan, with
//! two extensions: every occurrence carries an interval from its anchor
//! (`interval`) and an accumulated depth from the pattern's head
//! (`whole_interval`), and an externally supplied itemizer buckets intervals
//! before they are counted.
//!
//! ```
//! use gisp::{mine, transform, GispOptions};
//!
//! let sequences = vec![
//!     vec![(0, vec!["a".to_string()]), (1, vec!["b".to_string()])],
//!     vec![(0, vec!["a".to_string()]), (1, vec!["b".to_string()])],
//! ];
//! let isdb = transform(&sequences);
//! let opts = GispOptions::new(2);
//! let patterns = mine(&isdb, |interval| interval, &opts).unwrap();
//! assert!(patterns.iter().any(|p| p.support == 2));
//! ```

mod counter;
mod error;
mod isdb;
mod miner;
mod options;
mod pattern;
mod pdb;
mod projector;
#[cfg(test)]
mod properties;

pub use error::GispError;
pub use isdb::{Isdb, IsdbRow};
pub use options::GispOptions;
pub use pattern::Pattern;
pub use pdb::{Pdb, PdbRow};

/// Flattens per-sequence itemset lists into a sorted [`Isdb`] (spec §4.1).
pub fn transform(sequences: &[Vec<(i64, Vec<String>)>]) -> Isdb {
    Isdb::transform(sequences)
}

/// Mines every frequent pattern out of an [`Isdb`] (spec §4.4).
///
/// `itemize` buckets a re-anchored `interval` into the value patterns are
/// grouped and reported by; it must be a pure function of its input.
pub fn mine(isdb: &Isdb, itemize: impl Fn(i64) -> i64, opts: &GispOptions) -> Result<Vec<Pattern>, GispError> {
    miner::mine(isdb, itemize, opts)
}

/// Mines a [`Pdb`] directly, without flattening from an [`Isdb`] first
/// (spec §6). Consumes `pdb`; clone it first if it's needed again.
pub fn mine_subpatterns(
    pdb: Pdb,
    itemize: impl Fn(i64) -> i64,
    opts: &GispOptions,
) -> Result<Vec<Pattern>, GispError> {
    miner::mine_subpatterns(pdb, itemize, opts)
}
