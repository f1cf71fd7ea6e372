//! Domain ports

pub mod file_system;

pub use file_system::{is_not_found, FileSystem};
