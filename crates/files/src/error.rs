//! Error types for the file-system capability layer

use std::path::PathBuf;

use crate::WellKnownDirectory;

/// Result type for capability-level operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by a [`FileSystemContext`](crate::FileSystemContext)
/// and the location model built directly on it.
///
/// Resource-level operations wrap these as the diagnostic cause of their
/// own typed errors (see [`operations`](crate::operations)).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Nothing exists at {path}")]
    NotFound { path: PathBuf },

    #[error("Refusing to overwrite existing item at {path}")]
    AlreadyExists { path: PathBuf },

    #[error("The {kind} directory could not be resolved")]
    DirectoryUnavailable { kind: WellKnownDirectory },

    #[error("'{name}' is not a valid resource name")]
    InvalidName { name: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Map an I/O failure, promoting `NotFound` to [`Error::NotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io { path, source },
        }
    }

    /// Whether this error means the location was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
