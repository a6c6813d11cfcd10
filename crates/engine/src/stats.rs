// crates/engine/src/stats.rs
use serde::Serialize;
use std::path::{Component, Path};

/// A qualifying file and its line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated, without a leading `./`.
    pub path: String,
    pub lines: usize,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, lines: usize) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Immediate parent directory in the same `/` convention, `"."` at the root.
    pub fn parent_dir(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((parent, _)) if !parent.is_empty() => parent,
            _ => ".",
        }
    }
}

/// Render a root-relative path as a `/`-joined key, dropping `.` components.
pub fn normalize_relative(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
