use crate::commands::Commands;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "skud")]
#[command(about = "Presence tracking client for residents and the duty officer")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides api.base_url from config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Latitude to report with status changes
    #[arg(long, global = true, requires = "lon", allow_negative_numbers = true)]
    pub(crate) lat: Option<f64>,

    /// Longitude to report with status changes
    #[arg(long, global = true, requires = "lat", allow_negative_numbers = true)]
    pub(crate) lon: Option<f64>,

    /// Print admin results as pretty JSON
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
