//! JSON output for `--json`

use serde_json::{json, Value};
use vendorsync::application::VendorReport;
use vendorsync::config::ManifestWarning;
use vendorsync::VendorError;

pub fn vendor_complete(report: &VendorReport) -> Value {
    json!({
        "event": "vendor",
        "status": "success",
        "dry_run": report.dry_run,
        "output_dir": report.output_dir,
        "removed_output_dir": report.removed_output_dir,
        "removed_stale": report.removed_stale,
        "copied": report.copied,
        "shims": report.shims,
        "bytes": report.bytes_copied(),
    })
}

/// Error event; `path` and `io_kind` come from the first `VendorError` in the chain
pub fn vendor_error(err: &anyhow::Error) -> Value {
    let vendor_err = err.chain().find_map(|c| c.downcast_ref::<VendorError>());
    json!({
        "event": "vendor",
        "status": "error",
        "message": err.to_string(),
        "causes": err.chain().skip(1).map(|c| c.to_string()).collect::<Vec<_>>(),
        "path": vendor_err.map(|e| e.path()),
        "io_kind": vendor_err.and_then(|e| e.io_kind()).map(|k| k.to_string()),
    })
}

pub fn manifest_warning(warning: &ManifestWarning) -> Value {
    json!({
        "event": "warning",
        "key": warning.key,
        "file": warning.file,
        "line": warning.line,
        "suggestion": warning.suggestion,
    })
}
