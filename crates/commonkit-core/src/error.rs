//! Error types for file-system helpers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while operating on files and folders.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Path already exists.
    #[error("Path already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A file name that cannot be used inside a single directory.
    #[error("Invalid file name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Source and destination resolve to the same file.
    #[error("Source and destination are the same file: {path}")]
    SameFile { path: PathBuf },

    /// A name pattern that failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotADirectory { .. }
            | Self::SameFile { .. }
            | Self::InvalidName { .. }
            | Self::InvalidPattern { .. }
            | Self::Io { .. } => ErrorKind::Other,
        }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound { path }
            | Self::AlreadyExists { path }
            | Self::NotADirectory { path }
            | Self::SameFile { path }
            | Self::Io { path, .. } => Some(path),
            Self::InvalidName { .. } | Self::InvalidPattern { .. } => None,
        }
    }
}

/// Coarse classification of an [`FsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The target file or directory does not exist.
    NotFound,
    /// The target already exists and the operation refused to reuse it.
    AlreadyExists,
    /// Any other I/O, permission or platform failure.
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Not found"),
            Self::AlreadyExists => write!(f, "Already exists"),
            Self::Other => write!(f, "Other"),
        }
    }
}
