use serde::{Deserialize, Serialize};

/// One row of an interval-extended sequence database: item `item` occurred
/// in sequence `sid` at offset `interval` from that sequence's own origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsdbRow {
    pub sid: usize,
    pub item: String,
    pub interval: i64,
}

/// The flat, sorted `(sid, item, interval)` table every mining run starts
/// from (spec §3). Rows are sorted by `(sid, interval, item)` ascending, so
/// that every sequence's rows form one contiguous run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Isdb {
    pub rows: Vec<IsdbRow>,
}

impl Isdb {
    /// Flattens per-sequence itemset lists into a sorted ISDB (spec §4.1).
    ///
    /// `sequences[sid]` is the list of `(interval, items)` itemsets making up
    /// sequence `sid`, in any order; itemsets and the items within them may
    /// repeat across the outer list. Interval collisions within a sequence
    /// are broken by item name, giving every run a deterministic row order.
    pub fn transform(sequences: &[Vec<(i64, Vec<String>)>]) -> Isdb {
        let mut rows = Vec::new();
        for (sid, itemsets) in sequences.iter().enumerate() {
            for (interval, items) in itemsets {
                for item in items {
                    rows.push(IsdbRow {
                        sid,
                        item: item.clone(),
                        interval: *interval,
                    });
                }
            }
        }
        rows.sort_by(|a, b| (a.sid, a.interval, &a.item).cmp(&(b.sid, b.interval, &b.item)));
        Isdb { rows }
    }

    /// For every row index, the exclusive end index of the contiguous block
    /// of rows sharing that row's `sid`. Used by the Projector to bound a
    /// level-1 postfix to its own sequence rather than the whole table.
    pub fn segment_ends(&self) -> Vec<usize> {
        let n = self.rows.len();
        let mut ends = vec![0usize; n];
        let mut i = 0;
        while i < n {
            let sid = self.rows[i].sid;
            let mut j = i;
            while j < n && self.rows[j].sid == sid {
                j += 1;
            }
            for end in ends.iter_mut().take(j).skip(i) {
                *end = j;
            }
            i = j;
        }
        ends
    }
}
