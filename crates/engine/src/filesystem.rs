// crates/engine/src/filesystem.rs
use crate::config::ScanConfig;
use crate::error::{EngineError, Result};
use crate::processor::count_lines;
use crate::stats::{FileRecord, normalize_relative};
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Walk `config.root` and count every qualifying file.
///
/// # Errors
/// Fails only if the root cannot be accessed or is not a directory.
/// Unreadable files are recorded with 0 lines.
pub fn scan(config: &ScanConfig) -> Result<Vec<FileRecord>> {
    scan_with(config, count_lines)
}

/// Same walk as [`scan`] with a caller-supplied line counter.
///
/// # Errors
/// Fails only if the root cannot be accessed or is not a directory.
pub fn scan_with<F>(config: &ScanConfig, mut counter: F) -> Result<Vec<FileRecord>>
where
    F: FnMut(&Path) -> usize,
{
    let root = &config.root;
    let meta = std::fs::metadata(root).map_err(|source| EngineError::RootUnreadable {
        path: root.clone(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(EngineError::RootNotDirectory(root.clone()));
    }

    let mut builder = WalkBuilder::new(root);
    // Every entry is visited: hidden files included, ignore files not honored,
    // symlinked directories not descended.
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let excluded = config.excluded_dirs.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        !excluded.iter().any(|d| entry.file_name() == OsStr::new(d))
    });

    let mut records = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping walk entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if !has_allowed_extension(config, path) || is_excluded(config, relative) {
            log::trace!("Filtered out '{}'", path.display());
            continue;
        }

        let lines = counter(path);
        records.push(FileRecord::new(normalize_relative(relative), lines));
    }

    log::info!("Scanned {} qualifying files under '{}'", records.len(), root.display());
    Ok(records)
}

fn has_allowed_extension(config: &ScanConfig, path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| config.is_allowed_extension(ext))
}

/// True if any component of the root-relative path is an excluded name.
fn is_excluded(config: &ScanConfig, relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_str().is_some_and(|n| config.is_excluded_dir(n)),
        _ => false,
    })
}
