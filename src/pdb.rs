/// One row of a postfix database: item `item`, re-anchored to its own
/// postfix's origin, at offset `interval` with cumulative depth
/// `whole_interval` (spec §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdbRow {
    pub sid: usize,
    pub pid: usize,
    pub item: String,
    pub interval: i64,
    pub whole_interval: i64,
}

/// A projected database: a flat run of rows, grouped into postfixes that
/// share a `pid`. Rows belonging to the same `pid` are always contiguous —
/// the Projector builds every `Pdb` by appending whole postfixes in order,
/// never interleaving two `pid`s — so a postfix can be recovered by scanning
/// forward from its first row until the `pid` changes, without a separate
/// index.
#[derive(Debug, Clone, Default)]
pub struct Pdb {
    pub rows: Vec<PdbRow>,
}

impl Pdb {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the contiguous postfixes (rows sharing one `pid`) in
    /// this PDB, in `pid` order.
    pub fn postfixes(&self) -> Postfixes<'_> {
        Postfixes { rows: &self.rows }
    }
}

pub struct Postfixes<'a> {
    rows: &'a [PdbRow],
}

impl<'a> Iterator for Postfixes<'a> {
    type Item = &'a [PdbRow];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rows.is_empty() {
            return None;
        }
        let pid = self.rows[0].pid;
        let end = self.rows.iter().position(|r| r.pid != pid).unwrap_or(self.rows.len());
        let (head, tail) = self.rows.split_at(end);
        self.rows = tail;
        Some(head)
    }
}
