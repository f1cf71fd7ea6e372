//! Deprecated dependency rule

use std::path::PathBuf;

/// A dependency that is still vendored but wrapped in a warning shim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedEntry {
    pub source: PathBuf,
    /// Migration advice appended to the deprecation warning
    pub guidance: String,
}

impl DeprecatedEntry {
    pub fn new(source: impl Into<PathBuf>, guidance: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            guidance: guidance.into(),
        }
    }
}
