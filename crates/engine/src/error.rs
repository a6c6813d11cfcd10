// crates/engine/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot access scan root '{path}': {source}")]
    RootUnreadable {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scan root '{0}' is not a directory")]
    RootNotDirectory(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, EngineError>;
