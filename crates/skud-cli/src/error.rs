use std::panic::Location;

use error_location::ErrorLocation;
use skud_client::ClientError;
use skud_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read input: {source} {location}")]
    Input {
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What to print for the operator
    pub fn user_message(&self) -> String {
        match self {
            Self::Client { source } => source.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        CliError::Config { source }
    }
}

impl From<ClientError> for CliError {
    fn from(source: ClientError) -> Self {
        CliError::Client { source }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Output {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CliError::Input {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
