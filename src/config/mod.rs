// file: src/config/mod.rs
// version: 1.0.0
// guid: d3511b88-57a6-49d3-ab24-766bc6dd1877

//! Configuration module for the share setup
//!
//! `ShareConfig` is the raw, mergeable form (config file plus command line);
//! `ShareSettings` is what the pipeline runs with once the required values
//! are known to be present.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Share name used when none is given
pub const DEFAULT_SHARE_NAME: &str = "smb-pi";

/// Where the USB drive gets mounted
pub const MOUNT_DIR: &str = "/mnt/usb";

/// Network mount point; declared for NFS clients, not touched by the setup
pub const NFS_MOUNT_DIR: &str = "/mnt/nfs";

/// Samba server configuration file
pub const SAMBA_CONF: &str = "/etc/samba/smb.conf";

/// Raw share configuration, every field optional so sources can be layered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    /// Share name shown to Samba clients
    pub name: Option<String>,
    /// USB drive device path (e.g. /dev/sda1)
    pub device: Option<String>,
    /// User owning the shared files
    pub user: Option<String>,
    /// Group owning the shared files
    pub group: Option<String>,
    pub mount_dir: Option<PathBuf>,
    pub nfs_mount_dir: Option<PathBuf>,
    pub samba_conf: Option<PathBuf>,
    /// Interface to take the local address from
    pub interface: Option<String>,
    /// Also write the Samba share block and restart Samba
    pub configure_samba: Option<bool>,
}

impl ShareConfig {
    /// Layer `other` on top of `self`; values set in `other` win
    pub fn merge(self, other: ShareConfig) -> ShareConfig {
        ShareConfig {
            name: other.name.or(self.name),
            device: other.device.or(self.device),
            user: other.user.or(self.user),
            group: other.group.or(self.group),
            mount_dir: other.mount_dir.or(self.mount_dir),
            nfs_mount_dir: other.nfs_mount_dir.or(self.nfs_mount_dir),
            samba_conf: other.samba_conf.or(self.samba_conf),
            interface: other.interface.or(self.interface),
            configure_samba: other.configure_samba.or(self.configure_samba),
        }
    }

    /// Names of the required values that are missing or empty
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("device", &self.device),
            ("user", &self.user),
            ("group", &self.group),
        ] {
            if value.as_deref().map_or(true, str::is_empty) {
                missing.push(name);
            }
        }
        missing
    }

    /// Turn into settings, or `None` when a required value is missing
    pub fn into_settings(self) -> Option<ShareSettings> {
        if !self.missing_required().is_empty() {
            return None;
        }

        Some(ShareSettings {
            name: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_SHARE_NAME.to_string()),
            device: self.device?,
            user: self.user?,
            group: self.group?,
            mount_dir: self.mount_dir.unwrap_or_else(|| PathBuf::from(MOUNT_DIR)),
            nfs_mount_dir: self
                .nfs_mount_dir
                .unwrap_or_else(|| PathBuf::from(NFS_MOUNT_DIR)),
            samba_conf: self.samba_conf.unwrap_or_else(|| PathBuf::from(SAMBA_CONF)),
            interface: self.interface.filter(|i| !i.is_empty()),
            configure_samba: self.configure_samba.unwrap_or(false),
        })
    }
}

/// Complete settings for one setup run
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSettings {
    pub name: String,
    pub device: String,
    pub user: String,
    pub group: String,
    pub mount_dir: PathBuf,
    pub nfs_mount_dir: PathBuf,
    pub samba_conf: PathBuf,
    pub interface: Option<String>,
    pub configure_samba: bool,
}
