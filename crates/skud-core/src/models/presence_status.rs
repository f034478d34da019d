use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Where a resident currently is.
///
/// The server owns the authoritative value; clients only cache it for
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    /// In the building
    #[default]
    Inside,
    /// Away at work
    Work,
    /// Away for a day off
    DayOff,
    /// Away on a written request
    Request,
}

impl PresenceStatus {
    pub const ALL: [PresenceStatus; 4] = [Self::Inside, Self::Work, Self::DayOff, Self::Request];

    /// Wire representation used by the HTTP API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Work => "work",
            Self::DayOff => "day_off",
            Self::Request => "request",
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, Self::Inside)
    }
}

impl FromStr for PresenceStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "inside" => Ok(Self::Inside),
            "work" => Ok(Self::Work),
            "day_off" => Ok(Self::DayOff),
            "request" => Ok(Self::Request),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
