use std::path::PathBuf;

use clap::Parser;

/// Vendorsync - copy vendored dependencies out of node_modules
#[derive(Parser, Debug)]
#[command(name = "vendorsync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run without arguments to vendor the built-in table into ./js/deps.")]
pub struct Cli {
    /// Manifest file (default: vendorsync.toml in the project root, else built-in)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Directory that manifest paths are resolved against (default: current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Max concurrent copies per batch (0 = unbounded)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Check inputs and show what would be done without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the effective manifest as TOML and exit
    #[arg(long)]
    pub print_manifest: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
