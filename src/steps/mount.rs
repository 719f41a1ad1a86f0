// file: src/steps/mount.rs
// version: 1.0.0
// guid: 6d4a4220-efc0-4d4c-b9c6-4b670c35b28c

//! Mount directory creation and group ownership

use super::{print_manual_step, Confirm, SetupPlan};
use crate::config::ShareSettings;
use crate::error::SetupError;
use crate::Result;
use nix::unistd::{chown, Gid};
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Mode requested for the mount directory (before umask)
pub const MOUNT_DIR_MODE: u32 = 0o777;

/// Line to add to /etc/fstab for the USB drive
pub fn fstab_line(settings: &ShareSettings) -> String {
    format!(
        "{} {} auto defaults,user 0 1",
        settings.device,
        settings.mount_dir.display()
    )
}

/// Create the mount directory, hand its path to the share group and print
/// the fstab instruction
pub fn setup_mount_directory(
    plan: SetupPlan,
    confirm: &mut dyn Confirm,
    dry_run: bool,
) -> Result<SetupPlan> {
    let mount_dir = &plan.settings.mount_dir;
    let gid = plan.identity.gid;
    info!("creating mount directory {} using gid {}", mount_dir.display(), gid);

    if dry_run {
        info!(
            "DRY RUN: Would create {} and chgrp every component to {}",
            mount_dir.display(),
            gid
        );
    } else {
        create_mount_dir(mount_dir)?;
        change_group_along_path(mount_dir, gid)?;
    }

    print_manual_step(
        "to automatically mount the drive",
        "/etc/fstab",
        &fstab_line(&plan.settings),
    );
    confirm.confirm()?;

    Ok(plan)
}

fn create_mount_dir(path: &Path) -> Result<()> {
    // recursive mode treats an existing directory as success
    DirBuilder::new()
        .recursive(true)
        .mode(MOUNT_DIR_MODE)
        .create(path)
        .map_err(|e| {
            SetupError::config(format!(
                "could not create mount directory {}: {}",
                path.display(),
                e
            ))
        })
}

/// Set the group of every component from the root down to `path`.
///
/// Only a failure on `path` itself is fatal; ancestors are best effort.
pub fn change_group_along_path(path: &Path, gid: u32) -> Result<()> {
    let group = Gid::from_raw(gid);
    let mut components: Vec<&Path> = path
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    components.reverse();

    for component in components {
        match chown(component, None, Some(group)) {
            Ok(()) => debug!("chgrp {} {}", gid, component.display()),
            Err(e) if component == path => {
                return Err(SetupError::config(format!(
                    "could not change group of {} to {}: {}",
                    path.display(),
                    gid,
                    e
                )))
            }
            Err(e) => warn!(
                "could not change group of {} to {}: {}",
                component.display(),
                gid,
                e
            ),
        }
    }

    Ok(())
}
