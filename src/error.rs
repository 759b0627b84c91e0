//! Errors for the sync path

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Canonical source file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}
