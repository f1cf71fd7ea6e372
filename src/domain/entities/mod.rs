//! Domain entities

mod copy_entry;
mod deprecated_entry;
mod plan;

pub use copy_entry::{CopyEntry, CopyTarget};
pub use deprecated_entry::DeprecatedEntry;
pub use plan::{CopyOp, ShimOp, VendorPlan};
