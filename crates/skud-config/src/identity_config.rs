use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Identity file, relative to the config directory
    pub file: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_IDENTITY_FILENAME),
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.file);
        if self.file.is_empty() || path.is_absolute() || self.file.contains("..") {
            return Err(ConfigError::identity(
                "identity.file must be a non-empty relative path without '..'",
            ));
        }
        Ok(())
    }
}
