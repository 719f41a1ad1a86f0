// file: src/cli/commands.rs
// version: 1.0.0
// guid: 343f0b69-e3bd-4a16-b2b1-ea5367b57cea

//! Command implementations for the CLI

use super::args::Cli;
use crate::{
    config::{loader::ConfigLoader, ShareConfig},
    executor::{CommandRunner, DryRunRunner, SystemRunner},
    network::SystemInterfaces,
    steps::{AutoConfirm, Confirm, PromptConfirm, SetupPipeline},
    utils::SystemUtils,
    Result,
};
use clap::CommandFactory;
use tracing::{info, warn};

/// Run the share setup described by the command line
pub async fn setup_command(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let missing = config.missing_required();
    let Some(settings) = config.into_settings() else {
        print_usage(&missing);
        return Ok(());
    };

    if !cli.dry_run && !SystemUtils::is_root() {
        warn!("effective uid is not 0, system changes will likely fail");
    }

    let runner: Box<dyn CommandRunner> = if cli.dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(SystemRunner::new())
    };
    let mut confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(PromptConfirm::stdin())
    };

    let sudo_user = SystemUtils::elevation_from_env();
    let plan = SetupPipeline::new(runner.as_ref(), &SystemInterfaces, confirm.as_mut())
        .dry_run(cli.dry_run)
        .run(settings, sudo_user.as_deref())
        .await?;

    info!(
        "share {} ready on {}",
        plan.settings.name,
        plan.address.subnet()
    );
    eprintln!("Done.\nFinish the setup by restarting the computer with \"sudo reboot now\"");
    Ok(())
}

/// Config file (when given) overlaid with the command line flags
fn load_config(cli: &Cli) -> Result<ShareConfig> {
    let file_config = match &cli.config {
        Some(path) => ConfigLoader::new().load_share_config(path)?,
        None => ShareConfig::default(),
    };

    Ok(file_config.merge(cli.share_overrides()))
}

fn print_usage(missing: &[&str]) {
    eprintln!("{}", Cli::command().render_help());
    if !missing.is_empty() {
        eprintln!("missing required option(s): {}", missing.join(", "));
    }
}
