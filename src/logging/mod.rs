// file: src/logging/mod.rs
// version: 1.0.0
// guid: f50ba5cb-098c-4de5-ac39-8f92ea32d2a7

//! Logging system for the share setup

pub mod logger;

pub use logger::{init_logger, with_operation_span};
