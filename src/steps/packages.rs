// file: src/steps/packages.rs
// version: 1.0.0
// guid: 53c6f932-2a95-4f3c-bdc1-4593fd480e91

//! Package installation for the NFS and Samba servers

use super::SetupPlan;
use crate::error::SetupError;
use crate::executor::{CommandRunner, SystemCommand};
use crate::Result;
use tracing::info;

pub const PACKAGE_MANAGER: &str = "apt";

/// Server packages the share needs
pub const REQUIRED_PACKAGES: [&str; 5] = [
    "nfs-server",
    "nfs-common",
    "autofs",
    "samba",
    "samba-common-bin",
];

/// Non-interactive install of [`REQUIRED_PACKAGES`]
pub fn install_command() -> SystemCommand {
    SystemCommand::new(PACKAGE_MANAGER)
        .args(["install", "-y"])
        .args(REQUIRED_PACKAGES)
        .env("DEBIAN_FRONTEND", "noninteractive")
}

/// Install the required packages; any failure aborts the run
pub async fn install_required_software(
    plan: SetupPlan,
    runner: &dyn CommandRunner,
) -> Result<SetupPlan> {
    info!("installing required software");

    let command = install_command();
    if !runner.command_exists(PACKAGE_MANAGER) {
        return Err(SetupError::ProcessError {
            command: command.to_string(),
            exit_code: None,
            stderr: format!("{} not found in PATH", PACKAGE_MANAGER),
        });
    }

    runner.run(&command).await?;

    info!("Required packages installed successfully");
    Ok(plan)
}
