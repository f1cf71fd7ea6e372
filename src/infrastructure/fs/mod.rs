//! File system adapters

mod dry_run;
mod local;

pub use dry_run::DryRunFs;
pub use local::LocalFs;
