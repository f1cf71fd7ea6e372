//! Vendor planner
//!
//! Turns copy and deprecated rules into a `VendorPlan` with every
//! destination resolved. Planning never touches the file system.

use std::path::{Path, PathBuf};

use crate::domain::entities::{
    CopyEntry, CopyOp, CopyTarget, DeprecatedEntry, ShimOp, VendorPlan,
};
use crate::domain::services::shim::render_shim;
use crate::error::{VendorError, VendorResult};

/// Resolve where a copy of `source` lands for the given destination rule
pub fn resolve_destination(
    source: &Path,
    destination: &Path,
    target: CopyTarget,
) -> VendorResult<PathBuf> {
    if !target.is_directory(destination) {
        return Ok(destination.to_path_buf());
    }

    let base_name = source.file_name().ok_or_else(|| VendorError::InvalidEntry {
        path: source.to_path_buf(),
        reason: "source has no file name".to_string(),
    })?;
    Ok(destination.join(base_name))
}

/// Builds plans for a single output directory
#[derive(Debug, Clone)]
pub struct VendorPlanner {
    output_dir: PathBuf,
    module_prefix: String,
}

impl VendorPlanner {
    pub fn new(output_dir: impl Into<PathBuf>, module_prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            module_prefix: module_prefix.into(),
        }
    }

    pub fn plan_copy(&self, entry: &CopyEntry) -> VendorResult<CopyOp> {
        let destination = resolve_destination(&entry.source, &entry.destination, entry.target)?;
        Ok(CopyOp {
            source: entry.source.clone(),
            destination,
        })
    }

    /// Plan the renamed copy and wrapper for a deprecated dependency
    ///
    /// `dir/domReady.js` becomes `_domReady.js` plus a `domReady.js` shim.
    pub fn plan_shim(&self, entry: &DeprecatedEntry) -> VendorResult<ShimOp> {
        let invalid = |reason: &str| VendorError::InvalidEntry {
            path: entry.source.clone(),
            reason: reason.to_string(),
        };

        let file_name = entry
            .source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| invalid("source has no UTF-8 file name"))?;
        let name = entry
            .source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| invalid("source has no UTF-8 file stem"))?;

        Ok(ShimOp {
            source: entry.source.clone(),
            renamed: self.output_dir.join(format!("_{file_name}")),
            wrapper: self.output_dir.join(file_name),
            content: render_shim(&self.module_prefix, name, &entry.guidance),
        })
    }

    pub fn plan(
        &self,
        stale_files: &[PathBuf],
        copies: &[CopyEntry],
        deprecated: &[DeprecatedEntry],
    ) -> VendorResult<VendorPlan> {
        Ok(VendorPlan {
            output_dir: self.output_dir.clone(),
            stale_files: stale_files.to_vec(),
            copies: copies
                .iter()
                .map(|e| self.plan_copy(e))
                .collect::<VendorResult<_>>()?,
            shims: deprecated
                .iter()
                .map(|e| self.plan_shim(e))
                .collect::<VendorResult<_>>()?,
        })
    }
}
