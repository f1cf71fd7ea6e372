//! Vendored file copy rule

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How a copy destination should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CopyTarget {
    /// A destination with a file extension is a file, anything else a directory
    #[default]
    Infer,
    /// The destination is the exact file path to write
    File,
    /// The destination is a directory that receives the source's base name
    Directory,
}

impl CopyTarget {
    /// Decide whether `destination` names a directory under this rule
    pub fn is_directory(self, destination: &Path) -> bool {
        match self {
            CopyTarget::Infer => destination.extension().is_none(),
            CopyTarget::File => false,
            CopyTarget::Directory => true,
        }
    }
}

/// A single file to copy from the package cache into the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub target: CopyTarget,
}

impl CopyEntry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            target: CopyTarget::Infer,
        }
    }

    pub fn with_target(mut self, target: CopyTarget) -> Self {
        self.target = target;
        self
    }
}
