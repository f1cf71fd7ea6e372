//! Manifest type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CopyEntry, CopyTarget, DeprecatedEntry, VendorPlan};
use crate::domain::services::VendorPlanner;
use crate::error::VendorResult;

use super::loader::{self, ManifestWarning};

/// Built-in copy table: (source, destination) relative to the project root
const BUILTIN_COPIES: &[(&str, &str)] = &[
    (
        "node_modules/handlebars/dist/handlebars.runtime.js",
        "js/deps/handlebars.js",
    ),
    ("node_modules/highlight.js/styles/github.css", "assets/"),
    ("node_modules/hyperhtml/umd.js", "js/deps/hyperhtml.js"),
    ("node_modules/jquery/dist/jquery.slim.js", "js/deps/jquery.js"),
    ("node_modules/marked/lib/marked.js", "js/deps/"),
    ("node_modules/requirejs/require.js", "js/deps/"),
    ("node_modules/text/text.js", "js/deps/"),
    ("node_modules/webidl2/dist/webidl2.js", "js/deps/"),
    ("node_modules/pluralize/pluralize.js", "js/deps/"),
    (
        "node_modules/idb/build/iife/with-async-ittr-min.js",
        "js/deps/idb.js",
    ),
];

const BUILTIN_DEPRECATED: &[(&str, &str)] = &[(
    "node_modules/domReady/domReady.js",
    "Use standard DOMContentLoaded and document.readyState instead.",
)];

const BUILTIN_STALE_FILES: &[&str] = &["js/core/css/github.css"];

/// One entry of the `[[copy]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRule {
    pub source: PathBuf,
    pub dest: PathBuf,

    #[serde(default)]
    pub kind: CopyTarget,
}

/// One entry of the `[[deprecated]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecatedRule {
    pub source: PathBuf,
    pub guidance: String,
}

/// What to vendor and where
///
/// `Manifest::default()` is the built-in table. A manifest file only gets
/// the scalar defaults: omitted tables are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub stale_files: Vec<PathBuf>,

    #[serde(default = "default_module_prefix")]
    pub module_prefix: String,

    /// Max in-flight operations per batch; 0 means unbounded
    #[serde(default)]
    pub concurrency: usize,

    #[serde(default)]
    pub copy: Vec<CopyRule>,

    #[serde(default)]
    pub deprecated: Vec<DeprecatedRule>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("js/deps")
}

fn default_module_prefix() -> String {
    "deps".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            stale_files: BUILTIN_STALE_FILES.iter().map(PathBuf::from).collect(),
            module_prefix: default_module_prefix(),
            concurrency: 0,
            copy: BUILTIN_COPIES
                .iter()
                .map(|(source, dest)| CopyRule {
                    source: PathBuf::from(source),
                    dest: PathBuf::from(dest),
                    kind: CopyTarget::Infer,
                })
                .collect(),
            deprecated: BUILTIN_DEPRECATED
                .iter()
                .map(|(source, guidance)| DeprecatedRule {
                    source: PathBuf::from(source),
                    guidance: guidance.to_string(),
                })
                .collect(),
        }
    }
}

impl Manifest {
    /// Load a manifest file, discarding warnings
    pub fn load(path: &Path) -> VendorResult<Self> {
        loader::load_with_warnings(path).map(|(manifest, _)| manifest)
    }

    /// Load a manifest file and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> VendorResult<(Self, Vec<ManifestWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Point the run at `new_dir`
    ///
    /// Copy destinations inside the old output directory move with it, so
    /// the directory that is rebuilt is still the one the copies land in.
    /// Destinations elsewhere (such as `assets/`) are left alone.
    pub fn relocate_output_dir(&mut self, new_dir: PathBuf) {
        for rule in &mut self.copy {
            let Ok(rest) = rule.dest.strip_prefix(&self.output_dir) else {
                continue;
            };
            if rule.kind.is_directory(&rule.dest) {
                rule.kind = CopyTarget::Directory;
            }
            rule.dest = new_dir.join(rest);
        }
        self.output_dir = new_dir;
    }

    /// Resolve every path against `root` and plan the run
    pub fn to_plan(&self, root: &Path) -> VendorResult<VendorPlan> {
        let copies: Vec<CopyEntry> = self
            .copy
            .iter()
            .map(|rule| {
                CopyEntry::new(resolve(root, &rule.source), resolve(root, &rule.dest))
                    .with_target(rule.kind)
            })
            .collect();
        let deprecated: Vec<DeprecatedEntry> = self
            .deprecated
            .iter()
            .map(|rule| DeprecatedEntry::new(resolve(root, &rule.source), &rule.guidance))
            .collect();
        let stale: Vec<PathBuf> = self.stale_files.iter().map(|p| resolve(root, p)).collect();

        VendorPlanner::new(resolve(root, &self.output_dir), &self.module_prefix)
            .plan(&stale, &copies, &deprecated)
    }
}

/// Join `path` onto `root` and drop `.` components
///
/// Absolute paths are kept as given.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    root.join(path).components().collect()
}
