// crates/engine/src/report.rs
use crate::aggregate::DirectoryTotals;
use crate::stats::FileRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryRow {
    pub dir: String,
    pub lines: usize,
}

/// Sorted view of a scan, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub files: Vec<FileRecord>,
    pub directories: Vec<DirectoryRow>,
    pub total: usize,
}

impl Report {
    /// Both sorts are stable and descending by line count. Files tied on
    /// count keep their scan order; directories tied on count stay in path
    /// order.
    pub fn build(mut records: Vec<FileRecord>, totals: &DirectoryTotals) -> Self {
        records.sort_by(|a, b| b.lines.cmp(&a.lines));

        let mut directories: Vec<DirectoryRow> = totals
            .iter()
            .map(|(dir, lines)| DirectoryRow {
                dir: dir.to_string(),
                lines,
            })
            .collect();
        directories.sort_by(|a, b| b.lines.cmp(&a.lines));

        let total = records.iter().map(|r| r.lines).sum();

        Self {
            files: records,
            directories,
            total,
        }
    }
}
