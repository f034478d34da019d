use crate::geolocation::{GeolocationError, GeolocationProvider, PositionOptions};

use async_trait::async_trait;
use skud_core::Coordinates;

/// Provider for devices without positioning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait]
impl GeolocationProvider for NoGeolocation {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::unavailable())
    }
}
