// file: src/steps/mod.rs
// version: 1.0.0
// guid: 77ef751e-abe6-420e-adc1-e38a21c422dd

//! The setup pipeline and its steps
//!
//! Every step takes the [`SetupPlan`] and hands it back, so a step can only
//! run once the values it needs have been derived.

pub mod confirm;
pub mod exports;
pub mod mount;
pub mod packages;
pub mod samba;

pub use confirm::{AutoConfirm, Confirm, PromptConfirm};

use crate::config::ShareSettings;
use crate::executor::CommandRunner;
use crate::identity::{resolve_identity, Identity};
use crate::logging::with_operation_span;
use crate::network::{discover_local_address, InterfaceSource, LocalAddress};
use crate::utils::SystemUtils;
use crate::Result;
use colored::Colorize;
use tracing::info;

/// Everything derived for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SetupPlan {
    pub settings: ShareSettings,
    pub identity: Identity,
    pub address: LocalAddress,
}

/// Print an edit the operator has to make by hand
pub fn print_manual_step(purpose: &str, file: &str, line: &str) {
    println!(
        "{} {}, append the following line to the {} file:\n{}",
        "MANUAL STEP:".yellow().bold(),
        purpose,
        file,
        line
    );
}

/// Runs the steps in order, stopping at the first error
pub struct SetupPipeline<'a> {
    runner: &'a dyn CommandRunner,
    interfaces: &'a dyn InterfaceSource,
    confirm: &'a mut dyn Confirm,
    dry_run: bool,
}

impl<'a> SetupPipeline<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        interfaces: &'a dyn InterfaceSource,
        confirm: &'a mut dyn Confirm,
    ) -> Self {
        Self {
            runner,
            interfaces,
            confirm,
            dry_run: false,
        }
    }

    /// Skip filesystem changes; commands go wherever the runner sends them
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Derive the plan without touching the system
    pub fn prepare(&self, settings: ShareSettings, sudo_user: Option<&str>) -> Result<SetupPlan> {
        SystemUtils::ensure_elevated(sudo_user)?;

        let identity = with_operation_span("identity", || {
            resolve_identity(&settings.user, &settings.group)
        })?;

        let addresses = self.interfaces.addresses()?;
        let address = with_operation_span("network", || {
            discover_local_address(&addresses, settings.interface.as_deref())
        })?;

        Ok(SetupPlan {
            settings,
            identity,
            address,
        })
    }

    /// Run the whole setup
    pub async fn run(&mut self, settings: ShareSettings, sudo_user: Option<&str>) -> Result<SetupPlan> {
        let plan = self.prepare(settings, sudo_user)?;

        let plan = with_operation_span("mount", || {
            mount::setup_mount_directory(plan, &mut *self.confirm, self.dry_run)
        })?;
        let plan = packages::install_required_software(plan, self.runner).await?;
        let plan = exports::enable_exports(plan, &mut *self.confirm, self.runner).await?;

        let plan = if plan.settings.configure_samba {
            samba::configure_samba(plan, self.runner, self.dry_run).await?
        } else {
            info!("skipping samba share configuration (pass --configure-samba to enable)");
            plan
        };

        Ok(plan)
    }
}
