use crate::identity::IdentityError;

use std::panic::Location;

use error_location::ErrorLocation;
use skud_core::CoreError;
use thiserror::Error;

pub(crate) const NO_CONNECTION_MESSAGE: &str = "Нет связи с сервером";
pub(crate) const SERVER_ERROR_MESSAGE: &str = "Ошибка сервера";
pub(crate) const REQUEST_FAILED_MESSAGE: &str = "Ошибка запроса";
const NOT_REGISTERED_MESSAGE: &str = "Сначала зарегистрируйтесь";
const CANCELLED_MESSAGE: &str = "Операция отменена";

/// Everything that can go wrong in a client operation.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected locally, before any network call
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// The request never produced an HTTP response
    #[error("Network unreachable: {message} {location}")]
    NetworkUnreachable {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response; `message` is the server's `detail`
    #[error("Server error ({status}): {message} {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// The server does not know the persisted identifier
    #[error("Unknown identity: {message} {location}")]
    UnknownIdentity {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid response body: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Identity storage error: {source}")]
    Identity {
        #[source]
        source: IdentityError,
    },

    #[error("No identity is registered on this device {location}")]
    NotRegistered { location: ErrorLocation },

    #[error("Operation cancelled {location}")]
    Cancelled { location: ErrorLocation },
}

impl ClientError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert a transport failure
    #[track_caller]
    pub fn network(err: reqwest::Error) -> Self {
        ClientError::NetworkUnreachable {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn server<S: Into<String>>(status: u16, message: S) -> Self {
        ClientError::Server {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn not_registered() -> Self {
        ClientError::NotRegistered {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        ClientError::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Reclassify a 404 from an identity-scoped endpoint.
    #[track_caller]
    pub(crate) fn into_unknown_identity_if_not_found(self) -> Self {
        match self {
            ClientError::Server {
                status: 404,
                message,
                ..
            } => ClientError::UnknownIdentity {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => other,
        }
    }

    pub fn is_unknown_identity(&self) -> bool {
        matches!(self, ClientError::UnknownIdentity { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled { .. })
    }

    /// Text for the transient notification shown to the resident.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::Server { message, .. }
            | Self::UnknownIdentity { message, .. } => message.clone(),
            Self::NetworkUnreachable { .. } => NO_CONNECTION_MESSAGE.to_string(),
            Self::Json { .. } => SERVER_ERROR_MESSAGE.to_string(),
            Self::Identity { source } => source.user_message().to_string(),
            Self::NotRegistered { .. } => NOT_REGISTERED_MESSAGE.to_string(),
            Self::Cancelled { .. } => CANCELLED_MESSAGE.to_string(),
        }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        ClientError::Validation {
            message: err.user_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IdentityError> for ClientError {
    fn from(source: IdentityError) -> Self {
        ClientError::Identity { source }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::network(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
