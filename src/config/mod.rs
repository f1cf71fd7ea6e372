//! Manifest configuration for vendorsync
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (VENDORSYNC_*)
//! 3. `--manifest` file, or `vendorsync.toml` in the project root
//! 4. Built-in table (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, load_with_warnings, with_env_overrides, LoadedManifest, ManifestSource,
    ManifestWarning, MANIFEST_FILE_NAME,
};
pub use types::{resolve, CopyRule, DeprecatedRule, Manifest};
