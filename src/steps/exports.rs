// file: src/steps/exports.rs
// version: 1.0.0
// guid: 35409edd-9839-4b1e-9041-25134f07a93c

//! NFS export guidance and RPC service enablement

use super::{print_manual_step, Confirm, SetupPlan};
use crate::error::SetupError;
use crate::executor::{CommandRunner, SystemCommand};
use crate::network::Subnet;
use crate::Result;
use std::path::Path;
use tracing::{info, warn};

/// Services NFS needs at boot
pub const NFS_SERVICES: [&str; 2] = ["rpcbind", "nfs-common"];

/// Line to add to /etc/exports
pub fn exports_line(mount_dir: &Path, subnet: &Subnet) -> String {
    format!("{} {}(rw,sync)", mount_dir.display(), subnet)
}

/// Print the exports instruction, wait for it to be done, then enable the
/// NFS services
pub async fn enable_exports(
    plan: SetupPlan,
    confirm: &mut dyn Confirm,
    runner: &dyn CommandRunner,
) -> Result<SetupPlan> {
    info!("using ip {}", plan.address.ip);

    let subnet = plan.address.subnet();
    print_manual_step(
        "to make the mount accessible",
        "/etc/exports",
        &exports_line(&plan.settings.mount_dir, &subnet),
    );
    confirm.confirm()?;

    enable_services(runner).await?;
    Ok(plan)
}

/// Enable every service in [`NFS_SERVICES`].
///
/// All services are attempted; failures are reported together.
pub async fn enable_services(runner: &dyn CommandRunner) -> Result<()> {
    let mut failures = Vec::new();

    for service in NFS_SERVICES {
        info!("enabling {}", service);
        let command = SystemCommand::new("update-rc.d").args([service, "enable"]);
        if let Err(e) = runner.run(&command).await {
            warn!("could not enable {}: {}", service, e);
            failures.push(format!("{}: {}", service, e));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(SetupError::ServiceEnable(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::testing::RecordingRunner;
    use crate::steps::testing::{plan_for, Counting};
    use std::net::Ipv4Addr;

    #[test]
    fn test_exports_line() {
        let subnet = Subnet::containing(Ipv4Addr::new(192, 168, 1, 42), 24);

        assert_eq!(
            exports_line(Path::new("/mnt/usb"), &subnet),
            "/mnt/usb 192.168.1.0/24(rw,sync)"
        );
    }

    #[tokio::test]
    async fn test_enables_both_services_after_confirmation() {
        let runner = RecordingRunner::default();
        let mut confirm = Counting::default();

        enable_exports(plan_for("/mnt/usb".into()), &mut confirm, &runner)
            .await
            .unwrap();

        assert_eq!(confirm.calls, 1);
        assert_eq!(
            runner.recorded(),
            vec![
                "update-rc.d rpcbind enable".to_string(),
                "update-rc.d nfs-common enable".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_service_failures_are_collected() {
        let runner = RecordingRunner::failing_on("rpcbind");

        let err = enable_services(&runner).await.unwrap_err();

        // the second service is still attempted
        assert_eq!(runner.recorded().len(), 2);
        match err {
            SetupError::ServiceEnable(failures) => {
                assert_eq!(failures.len(), 1);
                assert!(failures[0].starts_with("rpcbind"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
