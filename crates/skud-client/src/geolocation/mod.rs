pub(crate) mod error;
pub(crate) mod fixed_position;
pub(crate) mod geolocator;
pub(crate) mod no_geolocation;
pub(crate) mod position_options;
pub(crate) mod provider;

pub use error::GeolocationError;
pub use fixed_position::FixedPosition;
pub use geolocator::Geolocator;
pub use no_geolocation::NoGeolocation;
pub use position_options::PositionOptions;
pub use provider::GeolocationProvider;
