//! Manifest loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{VendorError, VendorResult};

use super::types::Manifest;

/// Manifest file looked up in the project root when none is given
pub const MANIFEST_FILE_NAME: &str = "vendorsync.toml";

/// Non-fatal manifest warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective manifest came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    BuiltIn,
    File(PathBuf),
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::BuiltIn => write!(f, "built-in"),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A manifest together with its origin and load warnings
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    pub source: ManifestSource,
    pub warnings: Vec<ManifestWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> VendorResult<(Manifest, Vec<ManifestWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| VendorError::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VendorError::InvalidManifest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ManifestWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

/// Pick the manifest for a run
///
/// An explicit path is used as given and must exist. Otherwise
/// `vendorsync.toml` in the project root is used when present, falling back
/// to the built-in table.
pub fn discover(project_root: &Path, explicit: Option<&Path>) -> VendorResult<LoadedManifest> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default_path = project_root.join(MANIFEST_FILE_NAME);
            default_path.is_file().then_some(default_path)
        }
    };

    let (manifest, source, warnings) = match candidate {
        Some(path) => {
            let (manifest, warnings) = load_with_warnings(&path)?;
            (manifest, ManifestSource::File(path), warnings)
        }
        None => (Manifest::default(), ManifestSource::BuiltIn, Vec::new()),
    };

    Ok(LoadedManifest {
        manifest: with_env_overrides(manifest),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (VENDORSYNC_* prefix)
pub fn with_env_overrides(manifest: Manifest) -> Manifest {
    apply_env_overrides(manifest, |key| std::env::var(key).ok())
}

fn apply_env_overrides(
    mut manifest: Manifest,
    get_env: impl Fn(&str) -> Option<String>,
) -> Manifest {
    // VENDORSYNC_JOBS
    if let Some(jobs) = get_env("VENDORSYNC_JOBS") {
        match jobs.trim().parse::<usize>() {
            Ok(n) => manifest.concurrency = n,
            Err(_) => warn!(value = %jobs, "ignoring invalid VENDORSYNC_JOBS"),
        }
    }

    // VENDORSYNC_OUTPUT_DIR
    if let Some(dir) = get_env("VENDORSYNC_OUTPUT_DIR").filter(|d| !d.trim().is_empty()) {
        manifest.relocate_output_dir(PathBuf::from(dir));
    }

    manifest
}

/// Keys a manifest may contain, at any table level
const KNOWN_KEYS: &[&str] = &[
    "output_dir",
    "stale_files",
    "module_prefix",
    "concurrency",
    "copy",
    "deprecated",
    "source",
    "dest",
    "kind",
    "guidance",
];

/// 1-based line where `key` is assigned (`key = ...`) or opens a table
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let line = line
                .strip_prefix("[[")
                .or_else(|| line.strip_prefix('['))
                .unwrap_or(line);
            let line = line
                .strip_prefix('"')
                .and_then(|rest| rest.strip_prefix(key)?.strip_prefix('"'))
                .or_else(|| line.strip_prefix(key));
            line.map(str::trim_start)
                .is_some_and(|rest| rest.starts_with('=') || rest.starts_with(']'))
        })
        .map(|index| index + 1)
}

/// Closest known key within two edits of `unknown`
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, keeping a single row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
