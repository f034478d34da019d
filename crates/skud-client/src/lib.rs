//! Presence client: resident registration, status changes and the
//! register → main → confirm screen flow, over the SKUD HTTP API.

pub(crate) mod api;
pub(crate) mod error;
pub(crate) mod geolocation;
pub(crate) mod identity;
pub(crate) mod in_flight;
pub(crate) mod notification;
pub(crate) mod presence_client;
pub(crate) mod screen;

#[cfg(test)]
mod tests;

pub use api::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use geolocation::{
    FixedPosition, GeolocationError, GeolocationProvider, Geolocator, NoGeolocation,
    PositionOptions,
};
pub use identity::{
    FileIdentityStore, IdentityError, IdentityStore, LoadResult, MemoryIdentityStore,
    StorageStep, StoredIdentity,
};
pub use notification::{Notification, Notifier};
pub use presence_client::{ClientSettings, PresenceClient};
pub use screen::{MainView, Screen, ScreenKind};
