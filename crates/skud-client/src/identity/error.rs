use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// The filesystem step of an identity operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStep {
    CreateDir,
    Read,
    Write,
    Rename,
    Remove,
    Backup,
}

impl std::fmt::Display for StorageStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = match self {
            Self::CreateDir => "create directory",
            Self::Read => "read",
            Self::Write => "write",
            Self::Rename => "replace",
            Self::Remove => "remove",
            Self::Backup => "back up",
        };
        f.write_str(step)
    }
}

/// Errors related to the locally persisted identity.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Failed to {step} {path}: {source} {location}")]
    Storage {
        step: StorageStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to encode identity: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Identity store lock poisoned {location}")]
    Poisoned { location: ErrorLocation },
}

impl IdentityError {
    #[track_caller]
    pub fn storage(step: StorageStep, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            step,
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn poisoned() -> Self {
        Self::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The failed step, for filesystem errors
    pub fn step(&self) -> Option<StorageStep> {
        match self {
            Self::Storage { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Notification text for the resident.
    pub fn user_message(&self) -> &'static str {
        match self.step() {
            Some(StorageStep::Read) => "Не удалось прочитать данные на устройстве",
            Some(StorageStep::Remove) => "Не удалось удалить данные на устройстве",
            _ => "Не удалось сохранить данные на устройстве",
        }
    }

    /// Operator hint, written to the log next to the error.
    pub fn recovery_hint(&self) -> &'static str {
        match self.step() {
            Some(StorageStep::Read) => "Check that the identity file is readable.",
            Some(StorageStep::Backup) => {
                "Move the corrupted identity file away by hand, then restart."
            }
            Some(_) => "Check free space and permissions of the config directory.",
            None => "Restart the client; the identity on disk is unchanged.",
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
