// file: src/steps/samba.rs
// version: 1.0.0
// guid: c7db301b-1d36-43d8-9ab8-edbb32a74ea3

//! Samba share configuration

use super::SetupPlan;
use crate::executor::{CommandRunner, SystemCommand};
use crate::utils::append_if_absent;
use crate::Result;
use std::path::Path;
use tracing::info;

pub const SAMBA_INIT_SCRIPT: &str = "/etc/init.d/samba";

const SHARE_TEMPLATE: &str = "[share]
Comment = {name}
Path = {path}
Browseable = yes
Writeable = Yes
only guest = no
create mask = 0777
directory mask = 0777
Public = yes
Guest ok = yes
";

/// The smb.conf block exporting `mount_dir` as a guest-writable share
pub fn render_share_block(name: &str, mount_dir: &Path) -> String {
    SHARE_TEMPLATE
        .replace("{name}", name)
        .replace("{path}", &mount_dir.display().to_string())
}

/// Add the share block to smb.conf (once) and restart Samba
pub async fn configure_samba(
    plan: SetupPlan,
    runner: &dyn CommandRunner,
    dry_run: bool,
) -> Result<SetupPlan> {
    info!("setting up smb share");

    let conf = &plan.settings.samba_conf;
    let block = render_share_block(&plan.settings.name, &plan.settings.mount_dir);

    if dry_run {
        info!("DRY RUN: Would append share block to {}", conf.display());
    } else if append_if_absent(conf, &block)? {
        info!("share block appended to {}", conf.display());
    } else {
        info!("{} already has the share block", conf.display());
    }

    let output = runner
        .run(&SystemCommand::new(SAMBA_INIT_SCRIPT).args(["restart"]))
        .await?;
    if !output.trim().is_empty() {
        info!("{}", output.trim());
    }

    Ok(plan)
}
