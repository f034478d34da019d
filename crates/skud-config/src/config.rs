use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, GeolocationConfig, IdentityConfig, LoggingConfig, NotificationConfig,
    StartupConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub identity: IdentityConfig,
    pub geolocation: GeolocationConfig,
    pub notification: NotificationConfig,
    pub startup: StartupConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SKUD_CONFIG_DIR env var, else use ./.skud/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SKUD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SKUD_CONFIG_DIR env var > ./.skud/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.identity.validate()?;
        self.geolocation.validate()?;
        self.notification.validate()?;
        Ok(())
    }

    /// Absolute path of the persisted identity file.
    pub fn identity_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.identity.file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!("  identity: {}", self.identity.file);
        info!(
            "  geolocation: {} (high accuracy: {}, timeout {}ms, max age {}ms, fixed: {})",
            if self.geolocation.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.geolocation.high_accuracy,
            self.geolocation.timeout_ms,
            self.geolocation.maximum_age_ms,
            self.geolocation.fixed_position().is_some()
        );
        info!("  notification: {}s", self.notification.duration_secs);
        info!("  startup: on_fetch_failure={}", self.startup.on_fetch_failure);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("SKUD_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("SKUD_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Identity
        Self::apply_env_string("SKUD_IDENTITY_FILE", &mut self.identity.file);

        // Geolocation
        Self::apply_env_bool("SKUD_GEO_ENABLED", &mut self.geolocation.enabled);
        Self::apply_env_bool("SKUD_GEO_HIGH_ACCURACY", &mut self.geolocation.high_accuracy);
        Self::apply_env_parse("SKUD_GEO_TIMEOUT_MS", &mut self.geolocation.timeout_ms);
        Self::apply_env_parse(
            "SKUD_GEO_MAXIMUM_AGE_MS",
            &mut self.geolocation.maximum_age_ms,
        );
        Self::apply_env_option_parse("SKUD_GEO_LATITUDE", &mut self.geolocation.latitude);
        Self::apply_env_option_parse("SKUD_GEO_LONGITUDE", &mut self.geolocation.longitude);

        // Notification
        Self::apply_env_parse(
            "SKUD_NOTIFICATION_DURATION_SECS",
            &mut self.notification.duration_secs,
        );

        // Startup
        Self::apply_env_parse(
            "SKUD_STARTUP_ON_FETCH_FAILURE",
            &mut self.startup.on_fetch_failure,
        );

        // Logging
        Self::apply_env_parse("SKUD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SKUD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SKUD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for optional parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
