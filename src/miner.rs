use tracing::trace;

use crate::counter;
use crate::error::GispError;
use crate::isdb::Isdb;
use crate::options::GispOptions;
use crate::pattern::Pattern;
use crate::pdb::Pdb;
use crate::projector;

/// Recursively mines one PDB frame, emitting every frequent extension as a
/// one-element `Pattern` and recursing into its child PDB for longer ones
/// (spec §4.4). Termination follows from the Projector: every recursion
/// strictly shrinks the number of rows left to extend from, so an empty
/// PDB — the base case — is always reached.
fn mine_level(pdb: Pdb, itemize: &impl Fn(i64) -> i64, opts: &GispOptions) -> Vec<Pattern> {
    trace!(rows = pdb.rows.len(), "mine_level: entering frame");
    if pdb.is_empty() {
        return Vec::new();
    }

    let buckets = counter::compute_buckets(&pdb, itemize);
    let extensions = counter::count_extensions(&pdb, &buckets, opts);
    if opts.trace {
        tracing::debug!(extensions = extensions.len(), "mine_level: frequent extensions found");
    }

    let mut patterns = Vec::with_capacity(extensions.len());
    for (ext, support) in extensions {
        patterns.push(Pattern {
            sequence: vec![(ext.bucket, ext.item.clone())],
            support,
        });

        let child = projector::project(&pdb, &buckets, &ext);
        for mut sub in mine_level(child, itemize, opts) {
            sub.sequence.insert(0, (ext.bucket, ext.item.clone()));
            patterns.push(sub);
        }
    }
    patterns
}

/// Mines a PDB directly, without flattening from an ISDB first (spec §6,
/// "`mine_subpatterns(pdb)` direct entry"). Rejects a malformed
/// configuration before touching `pdb`.
pub fn mine_subpatterns(
    pdb: Pdb,
    itemize: impl Fn(i64) -> i64,
    opts: &GispOptions,
) -> Result<Vec<Pattern>, GispError> {
    opts.validate()?;
    Ok(mine_level(pdb, &itemize, opts))
}

/// Mines every frequent pattern out of an ISDB (spec §4.4, the public
/// entry point). Level 0 counts and projects single items directly off the
/// ISDB; everything past the head runs through [`mine_level`].
pub fn mine(isdb: &Isdb, itemize: impl Fn(i64) -> i64, opts: &GispOptions) -> Result<Vec<Pattern>, GispError> {
    opts.validate()?;

    let seed = counter::count_seed(isdb, opts.min_support);
    trace!(candidates = seed.len(), "mine: seed level");
    let segment_ends = isdb.segment_ends();

    let mut patterns = Vec::new();
    for (item, support) in seed {
        patterns.push(Pattern {
            sequence: vec![(0, item.clone())],
            support,
        });

        let child = projector::project_seed(isdb, &segment_ends, &item);
        for mut sub in mine_level(child, &itemize, opts) {
            sub.sequence.insert(0, (0, item.clone()));
            patterns.push(sub);
        }
    }
    Ok(patterns)
}
