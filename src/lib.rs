//! vendorsync - vendored dependency copier
//!
//! Copies a manifest of third-party files out of `node_modules/` into a
//! project's asset tree, deletes stale output, and wraps deprecated
//! dependencies in warning shims. The output directory is rebuilt from
//! scratch on every run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{VendorOptions, VendorReport, VendorUseCase};
pub use config::{Manifest, ManifestSource};
pub use domain::entities::{CopyEntry, CopyTarget, DeprecatedEntry, VendorPlan};
pub use domain::ports::FileSystem;
pub use error::{VendorError, VendorResult};
pub use infrastructure::{DryRunFs, LocalFs};
