//! Domain layer
//!
//! Entities describe what to vendor, services resolve them into a plan, and
//! ports define the file system the application layer runs the plan against.

pub mod entities;
pub mod ports;
pub mod services;
