//! skud - presence tracking client
//!
//! Residents report when they leave the building and when they are back;
//! the duty officer sees who is absent and where they were last seen.
//!
//! # Examples
//!
//! ```bash
//! # Register this device
//! skud register Ann Lee
//!
//! # Leave for work, attaching a position
//! skud --lat 55.75 --lon 37.61 leave work
//!
//! # Head count as JSON
//! skud admin stats --pretty
//! ```

mod admin;
mod admin_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod render;
mod resident;
mod shell;

#[cfg(test)]
mod tests;

use crate::{cli::Cli, commands::Commands, error::Result as CliErrorResult};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use skud_client::{FileIdentityStore, NoGeolocation, PresenceClient};
use skud_config::Config;
use skud_core::PresenceStatus;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<ExitCode> {
    let config = load_config(&cli)?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let identity = Arc::new(FileIdentityStore::new(config.identity_path()?));
    let client = PresenceClient::from_config(&config, identity, Arc::new(NoGeolocation))?;

    let succeeded = match cli.command {
        Commands::Admin { action } => return admin::run(client.api(), action, cli.pretty).await,
        Commands::Shell => {
            shell::run(&client).await?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Show | Commands::Back => resident::show_current(&client).await,
        Commands::Register { full_name } => {
            resident::register(&client, &full_name.join(" ")).await
        }
        Commands::Leave { status } => resident::change_status(&client, status.into()).await,
        Commands::Return => resident::change_status(&client, PresenceStatus::Inside).await,
    };

    Ok(resident::exit_code(succeeded))
}

/// Load config.toml and env overrides, then apply command-line flags on top.
fn load_config(cli: &Cli) -> CliErrorResult<Config> {
    let mut config = Config::load()?;

    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }
    if let (Some(latitude), Some(longitude)) = (cli.lat, cli.lon) {
        config.geolocation.enabled = true;
        config.geolocation.latitude = Some(latitude);
        config.geolocation.longitude = Some(longitude);
    }

    config.validate()?;
    Ok(config)
}
