// file: src/cli/args.rs
// version: 1.0.0
// guid: 25d7ca32-3a75-42c9-b3b1-56a220bd97bc

//! Command line argument definitions

use crate::config::ShareConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raspi-share-setup")]
#[command(about = "Set up NFS and Samba sharing of a USB drive on a Raspberry Pi")]
#[command(after_help = "** should be run with root privileges (sudo)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Share name. Defaults to "smb-pi"
    #[arg(short, long)]
    pub name: Option<String>,

    /// USB drive device path (required)
    #[arg(short, long)]
    pub device: Option<String>,

    /// User used for file ownership (required)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Group used for file ownership (required)
    #[arg(short, long)]
    pub group: Option<String>,

    /// YAML file with share settings; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Take the local address from this interface
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Do not wait for manual steps to be confirmed
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be done without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Also add the share to smb.conf and restart Samba
    #[arg(long)]
    pub configure_samba: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The share settings given on the command line
    pub fn share_overrides(&self) -> ShareConfig {
        ShareConfig {
            name: self.name.clone(),
            device: self.device.clone(),
            user: self.user.clone(),
            group: self.group.clone(),
            interface: self.interface.clone(),
            configure_samba: self.configure_samba.then_some(true),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "raspi-share-setup",
            "-n",
            "media",
            "-d",
            "/dev/sda1",
            "-u",
            "pi",
            "-g",
            "users",
            "-y",
        ])
        .unwrap();

        let overrides = cli.share_overrides();
        assert_eq!(overrides.name.as_deref(), Some("media"));
        assert_eq!(overrides.device.as_deref(), Some("/dev/sda1"));
        assert_eq!(overrides.user.as_deref(), Some("pi"));
        assert_eq!(overrides.group.as_deref(), Some("users"));
        assert!(overrides.configure_samba.is_none());
        assert!(cli.yes);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_missing_flags_still_parse() {
        let cli = Cli::try_parse_from(["raspi-share-setup"]).unwrap();
        assert_eq!(
            cli.share_overrides().missing_required(),
            vec!["device", "user", "group"]
        );
    }

    #[test]
    fn test_configure_samba_flag() {
        let cli = Cli::try_parse_from(["raspi-share-setup", "--configure-samba"]).unwrap();
        assert_eq!(cli.share_overrides().configure_samba, Some(true));
    }
}
