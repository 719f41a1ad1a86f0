// file: src/network/mod.rs
// version: 1.0.0
// guid: c24a7abd-defc-462f-8fc7-9341a8399fa9

//! Local network discovery

pub mod address;
pub mod interfaces;

pub use address::{discover_local_address, LocalAddress, Subnet};
pub use interfaces::{InterfaceAddress, InterfaceSource, SystemInterfaces};
