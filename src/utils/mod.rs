// file: src/utils/mod.rs
// version: 1.0.0
// guid: 2c431ccd-d622-4f64-aa3f-2bd9e7df8b39

//! Utility modules for system operations

pub mod file;
pub mod system;

pub use file::append_if_absent;
pub use system::SystemUtils;
