//! Errors surfaced by logger configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// The history destination is mandatory; the host must not continue without one.
    #[error("history file is not configured")]
    MissingHistoryFile,

    #[error("can't open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LogError>;
