//! Vendor command UI views
//!
//! Provides consistent rendering for the vendor run output.

use std::path::Path;

use vendorsync::application::VendorReport;
use vendorsync::config::{ManifestSource, ManifestWarning};

use crate::ui::icon::Icon;
use crate::ui::text::ColoredText;
use crate::ui::UiContext;

/// Show `path` relative to the project root when it lives under it
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Render the vendor command header
pub fn render_vendor_header(
    project_root: &Path,
    source: &ManifestSource,
    dry_run: bool,
    ui: &UiContext,
) -> String {
    let title = if dry_run {
        "Vendorsync (Dry Run)"
    } else {
        "Vendorsync"
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        Icon::Vendor.colored(ui.color, ui.unicode),
        ColoredText::info(title).bold().render(ui.color)
    ));
    out.push_str(&format!("  Project:  {}\n", project_root.display()));
    out.push_str(&format!("  Manifest: {}\n", source));
    out
}

/// Render unknown-key warnings from the manifest
pub fn render_manifest_warnings(warnings: &[ManifestWarning], ui: &UiContext) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!("Unknown manifest key '{}' in {}", w.key, location))
                .render(ui.color)
        ));
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!(
                "   {} Did you mean '{}'?\n",
                Icon::Arrow.colored(ui.color, ui.unicode),
                suggestion
            ));
        }
    }
    out
}

/// Render the outcome of a successful run
pub fn render_vendor_report(report: &VendorReport, project_root: &Path, ui: &UiContext) -> String {
    let verb = if report.dry_run { "Would copy" } else { "Copied" };
    let mut out = String::new();

    if report.removed_output_dir || !report.removed_stale.is_empty() {
        let mut removed = Vec::new();
        if report.removed_output_dir {
            removed.push(display_path(&report.output_dir, project_root));
        }
        removed.extend(
            report
                .removed_stale
                .iter()
                .map(|p| display_path(p, project_root)),
        );
        out.push_str(&format!(
            "{} {}\n",
            Icon::Trash.colored(ui.color, ui.unicode),
            ColoredText::dim(format!("Removed {}", removed.join(", "))).render(ui.color)
        ));
    }

    if ui.verbose > 0 {
        for copied in &report.copied {
            out.push_str(&format!(
                "  - {} {} {}\n",
                display_path(&copied.source, project_root),
                Icon::Arrow.render(ui.unicode),
                display_path(&copied.destination, project_root)
            ));
        }
        for shim in &report.shims {
            out.push_str(&format!(
                "  - {} {} {} (deprecated)\n",
                display_path(&shim.source, project_root),
                Icon::Arrow.render(ui.unicode),
                display_path(&shim.wrapper, project_root)
            ));
        }
    }

    let summary = format!(
        "{} {} files ({} copies, {} deprecation shims, {} bytes)",
        verb,
        report.files_written(),
        report.copied.len(),
        report.shims.len(),
        report.bytes_copied()
    );
    out.push_str(&format!(
        "{} {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::success(summary).render(ui.color)
    ));
    out
}

/// Render a fatal error with its full cause chain
pub fn render_vendor_error(err: &anyhow::Error, ui: &UiContext) -> String {
    format!(
        "{} {}\n{:?}\n",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error("Error").bold().render(ui.color),
        err
    )
}
