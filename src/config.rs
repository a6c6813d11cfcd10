// src/config.rs
use crate::args::Args;
pub use dirloc_engine::config::ScanConfig;

impl From<&Args> for ScanConfig {
    fn from(args: &Args) -> Self {
        // Extension and exclusion sets are fixed; only the root is user-facing.
        Self::for_root(args.root.clone())
    }
}
