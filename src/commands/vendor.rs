//! The vendor command: load the manifest, plan, execute, report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use vendorsync::application::{VendorOptions, VendorReport, VendorUseCase};
use vendorsync::config::{self, LoadedManifest};
use vendorsync::infrastructure::{DryRunFs, LocalFs};
use vendorsync::VendorPlan;

use crate::cli::Cli;
use crate::ui::views::vendor::{
    render_manifest_warnings, render_vendor_header, render_vendor_report,
};
use crate::ui::{json, UiContext};

pub async fn run(cli: &Cli, ui: &UiContext) -> Result<()> {
    let cwd = std::env::current_dir().context("could not determine current directory")?;
    let project_root: PathBuf = match &cli.project_root {
        Some(root) => cwd.join(root),
        None => cwd.clone(),
    };
    let manifest_path = cli.manifest.as_ref().map(|p| cwd.join(p));

    let LoadedManifest {
        mut manifest,
        source,
        warnings,
    } = config::discover(&project_root, manifest_path.as_deref())
        .context("failed to load manifest")?;

    if ui.json {
        for warning in &warnings {
            println!("{}", json::manifest_warning(warning));
        }
    } else {
        eprint!("{}", render_manifest_warnings(&warnings, ui));
    }

    if let Some(jobs) = cli.jobs {
        manifest.concurrency = jobs;
    }

    if cli.print_manifest {
        print!("{}", manifest.to_toml().context("failed to serialize manifest")?);
        return Ok(());
    }

    let plan = manifest
        .to_plan(&project_root)
        .context("failed to plan vendoring")?;
    debug!(
        manifest = %source,
        copies = plan.copies.len(),
        shims = plan.shims.len(),
        files = plan.file_count(),
        concurrency = manifest.concurrency,
        "planned vendoring run"
    );

    if !ui.json {
        println!(
            "{}",
            render_vendor_header(&project_root, &source, cli.dry_run, ui)
        );
    }

    let options = VendorOptions::new()
        .with_concurrency(manifest.concurrency)
        .with_dry_run(cli.dry_run);
    let report = execute(&plan, options)
        .await
        .with_context(|| format!("failed to vendor into {}", plan.output_dir.display()))?;

    if ui.json {
        println!("{}", json::vendor_complete(&report));
    } else {
        print!("{}", render_vendor_report(&report, &project_root, ui));
    }

    Ok(())
}

async fn execute(plan: &VendorPlan, options: VendorOptions) -> vendorsync::VendorResult<VendorReport> {
    if options.dry_run {
        VendorUseCase::new(DryRunFs::new(), options).execute(plan).await
    } else {
        VendorUseCase::new(LocalFs::new(), options).execute(plan).await
    }
}
