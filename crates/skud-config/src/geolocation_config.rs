use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GEO_ENABLED, DEFAULT_GEO_HIGH_ACCURACY,
    DEFAULT_GEO_MAXIMUM_AGE_MS, DEFAULT_GEO_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_TIMEOUT_MS: u64 = 100;
pub const MAX_TIMEOUT_MS: u64 = 5_000;
pub const MAX_MAXIMUM_AGE_MS: u64 = 3_600_000;

/// Position lookup attached to status changes.
///
/// Lookups are best-effort: a timeout or a missing fix never fails the
/// status change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub enabled: bool,
    pub high_accuracy: bool,
    /// Maximum wait for a fresh fix
    pub timeout_ms: u64,
    /// A cached fix younger than this is reused
    pub maximum_age_ms: u64,
    /// Fixed device position, used when both halves are set
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_GEO_ENABLED,
            high_accuracy: DEFAULT_GEO_HIGH_ACCURACY,
            timeout_ms: DEFAULT_GEO_TIMEOUT_MS,
            maximum_age_ms: DEFAULT_GEO_MAXIMUM_AGE_MS,
            latitude: None,
            longitude: None,
        }
    }
}

impl GeolocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn maximum_age(&self) -> Duration {
        Duration::from_millis(self.maximum_age_ms)
    }

    /// Configured fixed position as `(latitude, longitude)`
    pub fn fixed_position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_ms < MIN_TIMEOUT_MS || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::geolocation(format!(
                "geolocation.timeout_ms must be {}-{}, got {}",
                MIN_TIMEOUT_MS, MAX_TIMEOUT_MS, self.timeout_ms
            )));
        }

        if self.maximum_age_ms > MAX_MAXIMUM_AGE_MS {
            return Err(ConfigError::geolocation(format!(
                "geolocation.maximum_age_ms must be at most {}, got {}",
                MAX_MAXIMUM_AGE_MS, self.maximum_age_ms
            )));
        }

        match (self.latitude, self.longitude) {
            (None, None) => {}
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                    return Err(ConfigError::geolocation(format!(
                        "geolocation position out of range: {lat}, {lon}"
                    )));
                }
            }
            _ => {
                return Err(ConfigError::geolocation(
                    "geolocation.latitude and geolocation.longitude must be set together",
                ));
            }
        }

        Ok(())
    }
}
