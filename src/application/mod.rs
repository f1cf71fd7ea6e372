//! Application layer
//!
//! Use cases that orchestrate domain services over the file system port.

pub mod vendor;

pub use vendor::{CopiedFile, GeneratedShim, VendorOptions, VendorReport, VendorUseCase};
