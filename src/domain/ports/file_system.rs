//! FileSystem port - abstraction over the file operations a run performs
//!
//! The use case only talks to this trait, so a run can target the real disk
//! or a dry-run implementation that mutates nothing.

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Async file system interface
///
/// Implementations:
/// - `LocalFs` - `tokio::fs` on the local disk
/// - `DryRunFs` - validates inputs and logs, never writes
///
/// Methods return raw `io::Error`s; callers decide which kinds are tolerable.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Recursively remove a directory tree without following symlinks
    async fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a single file
    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Create one directory; the parent must already exist
    async fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Copy file contents, returning the number of bytes copied
    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Write `contents` to `path`, replacing any existing file
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Returns true when the error means the path was absent
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}
