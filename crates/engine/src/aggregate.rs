// crates/engine/src/aggregate.rs
use crate::stats::FileRecord;
use std::collections::BTreeMap;

/// Line totals keyed by immediate parent directory.
///
/// Backed by a `BTreeMap` so iteration order is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTotals(BTreeMap<String, usize>);

impl DirectoryTotals {
    pub fn add(&mut self, dir: &str, lines: usize) {
        *self.0.entry(dir.to_string()).or_insert(0) += lines;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
impl DirectoryTotals {
    fn get(&self, dir: &str) -> Option<usize> {
        self.0.get(dir).copied()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn total(&self) -> usize {
        self.0.values().sum()
    }
}

/// Fold each record into its parent directory's running total.
pub fn build_directory_totals(records: &[FileRecord]) -> DirectoryTotals {
    let mut totals = DirectoryTotals::default();
    for record in records {
        totals.add(record.parent_dir(), record.lines);
    }
    totals
}
