//! Domain services
//!
//! Pure logic with no I/O: destination resolution and shim rendering.

mod planner;
mod shim;

pub use planner::{resolve_destination, VendorPlanner};
pub use shim::{deprecation_message, escape_js_string, render_shim, renamed_module_id};
