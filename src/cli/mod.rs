// file: src/cli/mod.rs
// version: 1.0.0
// guid: 42f7aaf3-df85-43a5-a9f2-b81d38f340c6

//! Command line interface for the share setup

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::setup_command;
