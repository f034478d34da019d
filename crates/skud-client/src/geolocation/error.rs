use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a position fix could not be produced.
///
/// Never surfaced to the resident: a failed lookup just omits coordinates.
#[derive(Error, Debug)]
pub enum GeolocationError {
    #[error("Geolocation is not available on this device {location}")]
    Unavailable { location: ErrorLocation },

    #[error("Geolocation permission denied {location}")]
    PermissionDenied { location: ErrorLocation },

    #[error("Position unavailable: {message} {location}")]
    PositionUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl GeolocationError {
    #[track_caller]
    pub fn unavailable() -> Self {
        Self::Unavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn permission_denied() -> Self {
        Self::PermissionDenied {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn position_unavailable<S: Into<String>>(message: S) -> Self {
        Self::PositionUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
