//! Vendorsync CLI - copy vendored dependencies out of node_modules
//!
//! Usage: vendorsync [OPTIONS]
//!
//! With no options, vendors the built-in dependency table of the current
//! directory into `js/deps`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use ui::views::vendor::render_vendor_error;
use ui::UiContext;

/// Log to stderr; `RUST_LOG` overrides the `-v` derived level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vendorsync={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ui = UiContext::new(cli.json, cli.verbose);

    match commands::vendor::run(&cli, &ui).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if ui.json {
                println!("{}", ui::json::vendor_error(&err));
            }
            eprint!("{}", render_vendor_error(&err, &ui));
            ExitCode::FAILURE
        }
    }
}
