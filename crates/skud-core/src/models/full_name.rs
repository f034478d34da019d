use crate::{CoreError, CoreResult};

use serde::Serialize;

/// Minimum number of characters in a trimmed full name
pub const MIN_FULL_NAME_CHARS: usize = 2;

const INVALID_FULL_NAME_MESSAGE: &str = "Введите корректное ФИО";

/// A resident's full name, trimmed and length-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Validate user input. Never touches the network.
    #[track_caller]
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.chars().count() < MIN_FULL_NAME_CHARS {
            return Err(CoreError::validation(INVALID_FULL_NAME_MESSAGE));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
