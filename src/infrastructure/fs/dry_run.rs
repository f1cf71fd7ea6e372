//! Dry-run File System
//!
//! Checks that every input a real run would read is present, logs each
//! mutation it would have made, and leaves the disk untouched.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::FileSystem;

/// Directories the run would have removed or created so far
#[derive(Debug, Default)]
struct Simulated {
    removed: Vec<PathBuf>,
    created: HashSet<PathBuf>,
}

#[derive(Debug, Default)]
pub struct DryRunFs {
    state: Mutex<Simulated>,
}

impl DryRunFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, Simulated> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Whether `dir` would exist at this point of a real run
    async fn dir_exists(&self, dir: &Path) -> io::Result<bool> {
        {
            let state = self.state();
            if state.created.contains(dir) {
                return Ok(true);
            }
            if state.removed.iter().any(|r| dir.starts_with(r)) {
                return Ok(false);
            }
        }
        match tokio::fs::metadata(dir).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Fail the way a real write into `path` would if its parent is missing
    async fn require_parent(&self, path: &Path) -> io::Result<()> {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        if self.dir_exists(parent).await? {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not an existing directory", parent.display()),
            ))
        }
    }
}

#[async_trait]
impl FileSystem for DryRunFs {
    async fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let meta = tokio::fs::symlink_metadata(path).await?;
        if meta.is_file() {
            return Err(io::Error::other(format!(
                "{} is not a directory",
                path.display()
            )));
        }
        info!(path = %path.display(), "dry run: would remove directory");
        let mut state = self.state();
        state.created.retain(|dir| !dir.starts_with(path));
        state.removed.push(path.to_path_buf());
        Ok(())
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        let meta = tokio::fs::symlink_metadata(path).await?;
        if meta.is_dir() {
            return Err(io::Error::other(format!("{} is a directory", path.display())));
        }
        info!(path = %path.display(), "dry run: would remove file");
        Ok(())
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.require_parent(path).await?;
        info!(path = %path.display(), "dry run: would create directory");
        self.state().created.insert(path.to_path_buf());
        Ok(())
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let meta = tokio::fs::metadata(from).await?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", from.display()),
            ));
        }
        self.require_parent(to).await?;
        info!(
            from = %from.display(),
            to = %to.display(),
            bytes = meta.len(),
            "dry run: would copy"
        );
        Ok(meta.len())
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.require_parent(path).await?;
        info!(path = %path.display(), bytes = contents.len(), "dry run: would write");
        Ok(())
    }
}
