// file: src/network/address.rs
// version: 1.0.0
// guid: 8a3c683d-8ccc-41fd-a01d-458eb3fc15da

//! Local address selection and subnet derivation

use super::InterfaceAddress;
use crate::error::SetupError;
use crate::Result;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, info};

/// Prefix length of the network that gets exported
pub const EXPORT_PREFIX_LEN: u8 = 24;

/// The IPv4 address the shares are announced on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddress {
    pub interface: String,
    pub ip: Ipv4Addr,
}

impl LocalAddress {
    /// The /24 network containing this address
    pub fn subnet(&self) -> Subnet {
        Subnet::containing(self.ip, EXPORT_PREFIX_LEN)
    }
}

/// An IPv4 network in CIDR form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subnet {
    pub network: Ipv4Addr,
    pub prefix_len: u8,
}

impl Subnet {
    /// Mask `ip` down to its `prefix_len` network
    pub fn containing(ip: Ipv4Addr, prefix_len: u8) -> Self {
        let prefix_len = prefix_len.min(32);
        let mask = u32::MAX.checked_shl(32 - u32::from(prefix_len)).unwrap_or(0);
        Self {
            network: Ipv4Addr::from(u32::from(ip) & mask),
            prefix_len,
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

/// Pick the local IPv4 address to use.
///
/// Only non-loopback IPv4 addresses count. With `preferred_interface` set,
/// the first such address on that interface is taken; otherwise the first
/// one in enumeration order.
pub fn discover_local_address(
    addresses: &[InterfaceAddress],
    preferred_interface: Option<&str>,
) -> Result<LocalAddress> {
    info!("getting local ip address");

    let mut candidates = addresses.iter().filter_map(|a| match a.ip {
        IpAddr::V4(ip) if !ip.is_loopback() => Some(LocalAddress {
            interface: a.interface.clone(),
            ip,
        }),
        _ => None,
    });

    let found = match preferred_interface {
        Some(name) => candidates.find(|c| c.interface == name),
        None => candidates.next(),
    };

    let address = found.ok_or(SetupError::NoLocalAddress)?;
    debug!("selected {} on {}", address.ip, address.interface);
    Ok(address)
}
