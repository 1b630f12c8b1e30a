use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or write the timestamps of a single file.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("{} does not exist or is inaccessible", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied for {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl AccessError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => AccessError::NotFound { path },
            io::ErrorKind::PermissionDenied => AccessError::PermissionDenied { path },
            _ => AccessError::Io { path, source: err },
        }
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{0}")]
    Usage(String),

    #[error("{}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("could not update {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: AccessError,
    },

    #[error("could not list {}: {source}", path.display())]
    ListDirectory { path: PathBuf, source: io::Error },

    #[error("could not write report: {0}")]
    Report(#[from] io::Error),

    #[error("{failed} of {total} files could not be updated")]
    Incomplete { failed: usize, total: usize },
}

impl SyncError {
    /// Name printed in front of the message when the run fails.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Usage(_) => "UsageError",
            SyncError::DirectoryNotFound(_) => "DirectoryNotFoundError",
            SyncError::Metadata { .. } => "MetadataError",
            SyncError::ListDirectory { .. } => "ListDirectoryError",
            SyncError::Report(_) => "OutputError",
            SyncError::Incomplete { .. } => "IncompleteError",
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, SyncError::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
