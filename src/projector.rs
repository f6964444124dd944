use crate::counter::Extension;
use crate::isdb::Isdb;
use crate::pdb::{Pdb, PdbRow};

/// Builds the level-1 (seed) PDB for a frequent single item (spec §4.2).
///
/// For every occurrence of `item` in the ISDB, emits a new postfix holding
/// the rows strictly after it within the *same sequence* (bounded by
/// `segment_ends`, not the end of the whole table), re-anchored so that
/// `interval` is relative to the occurrence and `whole_interval` starts out
/// equal to `interval`. A postfix with nothing past the anchor contributes
/// no rows and is pruned: no `pid` is allocated for it.
pub fn project_seed(isdb: &Isdb, segment_ends: &[usize], item: &str) -> Pdb {
    let mut rows = Vec::new();
    let mut next_pid = 0usize;
    for (i, anchor) in isdb.rows.iter().enumerate() {
        if anchor.item != item {
            continue;
        }
        let end = segment_ends[i];
        if i + 1 >= end {
            continue;
        }
        let pid = next_pid;
        next_pid += 1;
        for row in &isdb.rows[i + 1..end] {
            let interval = row.interval - anchor.interval;
            rows.push(PdbRow {
                sid: row.sid,
                pid,
                item: row.item.clone(),
                interval,
                whole_interval: interval,
            });
        }
    }
    Pdb { rows }
}

/// Builds the next-level PDB from a parent PDB and a frequent extension
/// `(bucket, item)` (spec §4.2).
///
/// Matches every parent row whose item equals `ext.item` and whose
/// already-computed bucket (`buckets[i]`, parallel to `pdb.rows`) equals
/// `ext.bucket` — independent of whether that row itself satisfied the
/// Counter's interval constraints, since those only gate what gets counted,
/// not what the Projector considers an anchor. For each match, emits the
/// rows after it within its own postfix (same `pid`), re-anchoring
/// `interval` and carrying `whole_interval` through unchanged (the depth
/// already accumulated does not reset).
pub fn project(pdb: &Pdb, buckets: &[i64], ext: &Extension) -> Pdb {
    let mut rows = Vec::new();
    let mut next_pid = 0usize;
    let n = pdb.rows.len();
    let mut i = 0;
    while i < n {
        let anchor = &pdb.rows[i];
        if anchor.item == ext.item && buckets[i] == ext.bucket {
            let pid = anchor.pid;
            let anchor_interval = anchor.interval;
            let new_pid = next_pid;
            let mut emitted = false;
            let mut j = i + 1;
            while j < n && pdb.rows[j].pid == pid {
                let row = &pdb.rows[j];
                rows.push(PdbRow {
                    sid: row.sid,
                    pid: new_pid,
                    item: row.item.clone(),
                    interval: row.interval - anchor_interval,
                    whole_interval: row.whole_interval,
                });
                emitted = true;
                j += 1;
            }
            if emitted {
                next_pid += 1;
            }
        }
        i += 1;
    }
    Pdb { rows }
}
