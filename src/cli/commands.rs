//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, CircleAreaReporter};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        None => cmd_report(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(settings),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

#[instrument]
fn cmd_report() -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let circle = CircleAreaReporter::new(stdin.lock(), stdout.lock()).run()?;
    debug!(area = circle.area, "report complete");
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn cmd_config_path() -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| ApplicationError::Config {
        message: "cannot determine config directory".into(),
    })?;
    output::info(&path.display());
    Ok(())
}

#[instrument]
fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
