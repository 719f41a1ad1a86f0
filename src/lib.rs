// file: src/lib.rs
// version: 1.0.0
// guid: dcce3fc6-3df5-478d-a5c7-b998c53087e5

//! # raspi-share-setup
//!
//! One-time setup of NFS and Samba sharing for a USB drive on a Raspberry Pi:
//! resolves the owning user and group, finds the local address, prepares the
//! mount directory, installs the server packages and prints the fstab and
//! exports lines that still have to be added by hand.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod identity;
pub mod logging;
pub mod network;
pub mod steps;
pub mod utils;

pub use error::{Result, SetupError};
