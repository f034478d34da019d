mod api_config;
mod config;
mod error;
mod geolocation_config;
mod identity_config;
mod log_level;
mod logging_config;
mod notification_config;
mod startup_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use geolocation_config::GeolocationConfig;
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use startup_config::{FetchFailurePolicy, StartupConfig};

pub const CONFIG_DIR_ENV: &str = "SKUD_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".skud";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_IDENTITY_FILENAME: &str = "identity.json";
const DEFAULT_GEO_ENABLED: bool = true;
const DEFAULT_GEO_HIGH_ACCURACY: bool = true;
const DEFAULT_GEO_TIMEOUT_MS: u64 = 5000;
const DEFAULT_GEO_MAXIMUM_AGE_MS: u64 = 60000;
const DEFAULT_NOTIFICATION_DURATION_SECS: u64 = 3;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
