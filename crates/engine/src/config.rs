// crates/engine/src/config.rs
use derive_builder::Builder;
use std::path::PathBuf;

/// File extensions (without the leading dot) that qualify for counting.
/// Compared case-sensitively against `Path::extension`.
pub const ALLOWED_EXTENSIONS: [&str; 7] = ["svelte", "ts", "rs", "js", "css", "html", "json"];

/// Directory names that are never descended into, at any depth.
pub const EXCLUDED_DIRS: [&str; 6] = ["node_modules", "target", "dist", ".svelte-kit", ".git", "build"];

fn default_extensions() -> Vec<String> {
    ALLOWED_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_excluded_dirs() -> Vec<String> {
    EXCLUDED_DIRS.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,
    #[builder(default = "default_excluded_dirs()")]
    pub excluded_dirs: Vec<String>,
}

impl ScanConfig {
    /// Default configuration rooted at `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
        }
    }
}
