use crate::{ConfigError, ConfigErrorResult, DEFAULT_NOTIFICATION_DURATION_SECS};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_DURATION_SECS: u64 = 1;
pub const MAX_DURATION_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long an error notification stays visible
    pub duration_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_NOTIFICATION_DURATION_SECS,
        }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.duration_secs < MIN_DURATION_SECS || self.duration_secs > MAX_DURATION_SECS {
            return Err(ConfigError::config(format!(
                "notification.duration_secs must be {}-{}, got {}",
                MIN_DURATION_SECS, MAX_DURATION_SECS, self.duration_secs
            )));
        }
        Ok(())
    }
}
