//! Error types for vendorsync
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vendorsync operations
pub type VendorResult<T> = Result<T, VendorError>;

/// Main error type for vendoring operations
#[derive(Error, Debug)]
pub enum VendorError {
    /// Removing the output directory failed for a reason other than absence
    #[error("failed to remove directory {path}")]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing a stale file failed for a reason other than absence
    #[error("failed to remove file {path}")]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the output directory failed
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a vendored file failed
    #[error("failed to copy {from} to {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated deprecation shim failed
    #[error("failed to write shim {path}")]
    WriteShim {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file could not be read
    #[error("failed to read manifest {path}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid TOML or has the wrong shape
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// A manifest entry cannot be turned into a file operation
    #[error("invalid entry '{path}': {reason}")]
    InvalidEntry { path: PathBuf, reason: String },
}

impl VendorError {
    /// Path the failing operation was acting on
    pub fn path(&self) -> &std::path::Path {
        match self {
            VendorError::RemoveDir { path, .. }
            | VendorError::RemoveFile { path, .. }
            | VendorError::CreateDir { path, .. }
            | VendorError::WriteShim { path, .. }
            | VendorError::ReadManifest { path, .. }
            | VendorError::InvalidEntry { path, .. } => path,
            VendorError::Copy { from, .. } => from,
            VendorError::InvalidManifest { file, .. } => file,
        }
    }

    /// Underlying I/O error kind, if this error wraps one
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            VendorError::RemoveDir { source, .. }
            | VendorError::RemoveFile { source, .. }
            | VendorError::CreateDir { source, .. }
            | VendorError::Copy { source, .. }
            | VendorError::WriteShim { source, .. }
            | VendorError::ReadManifest { source, .. } => Some(source.kind()),
            VendorError::InvalidManifest { .. } | VendorError::InvalidEntry { .. } => None,
        }
    }
}
