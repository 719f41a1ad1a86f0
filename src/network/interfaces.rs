// file: src/network/interfaces.rs
// version: 1.0.0
// guid: 782b824f-277d-4cf8-8180-4625355caebc

//! Interface address enumeration

use crate::error::SetupError;
use crate::Result;
use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use std::net::IpAddr;

/// One address bound to one interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub interface: String,
    pub ip: IpAddr,
}

impl InterfaceAddress {
    pub fn new(interface: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            interface: interface.into(),
            ip,
        }
    }
}

/// Source of the host's interface addresses
pub trait InterfaceSource {
    /// All addresses, in enumeration order
    fn addresses(&self) -> Result<Vec<InterfaceAddress>>;
}

/// Reads interfaces from the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn addresses(&self) -> Result<Vec<InterfaceAddress>> {
        let interfaces = NetworkInterface::show()
            .map_err(|e| SetupError::network(format!("Failed to get network interfaces: {}", e)))?;

        Ok(interfaces
            .into_iter()
            .flat_map(|iface| {
                let name = iface.name;
                iface
                    .addr
                    .into_iter()
                    .map(move |addr| InterfaceAddress::new(name.clone(), addr.ip()))
            })
            .collect())
    }
}

impl InterfaceSource for Vec<InterfaceAddress> {
    fn addresses(&self) -> Result<Vec<InterfaceAddress>> {
        Ok(self.clone())
    }
}
