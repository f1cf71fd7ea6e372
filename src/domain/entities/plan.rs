//! Resolved vendoring plan
//!
//! A plan is the fully resolved list of file operations for one run. Every
//! path in it is absolute and final: nothing is inferred at execution time.

use std::path::PathBuf;

/// Copy one file to an exact destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOp {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Vendor a deprecated dependency behind a warning shim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimOp {
    pub source: PathBuf,
    /// `_<name>` copy of the original module
    pub renamed: PathBuf,
    /// Generated wrapper written under the original name
    pub wrapper: PathBuf,
    pub content: String,
}

/// Everything a run does, in execution order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VendorPlan {
    pub output_dir: PathBuf,
    pub stale_files: Vec<PathBuf>,
    pub copies: Vec<CopyOp>,
    pub shims: Vec<ShimOp>,
}

impl VendorPlan {
    /// Number of files the plan writes
    pub fn file_count(&self) -> usize {
        self.copies.len() + self.shims.len() * 2
    }
}
