//! Error types for inistack
//!
//! Uses `thiserror` for library errors. Every failure is surfaced to the
//! immediate caller; nothing here is retried.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Global or local file missing/unreadable while in strict mode
    #[error("configuration file {path} could not be found or read")]
    ConfigFileNotFound { path: PathBuf },

    /// The local override file could not be written.
    ///
    /// `path` is relative to the installation root when possible so it can be
    /// shown to an administrator as-is.
    #[error("configuration file {path} is not writable; check the file permissions")]
    ConfigFileNotWritable { path: PathBuf },

    /// Section defined in neither the global nor the local document
    #[error("section '{name}' is not defined in the global or local configuration")]
    UndefinedSection { name: String },

    /// Hostname cannot be used as part of a file name
    #[error("hostname '{hostname}' is not a valid configuration file name")]
    InvalidHostname { hostname: String },

    /// Store settings file could not be parsed
    #[error("invalid settings in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Map a file-system port error raised while reading `path`.
    pub(crate) fn from_read(path: PathBuf, err: FsError) -> Self {
        tracing::debug!(path = %path.display(), error = %err, "config read failed");
        StoreError::ConfigFileNotFound { path }
    }
}
