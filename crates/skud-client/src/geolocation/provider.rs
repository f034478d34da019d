use crate::geolocation::{GeolocationError, PositionOptions};

use async_trait::async_trait;
use skud_core::Coordinates;

/// Source of device positions.
///
/// Implementations may fail or never resolve; `Geolocator` bounds the wait.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, GeolocationError>;
}
