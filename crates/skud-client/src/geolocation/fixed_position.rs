use crate::geolocation::{GeolocationError, GeolocationProvider, PositionOptions};

use async_trait::async_trait;
use skud_core::Coordinates;

/// Provider that always reports the same, externally supplied position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    coordinates: Coordinates,
}

impl FixedPosition {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl GeolocationProvider for FixedPosition {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, GeolocationError> {
        if !self.coordinates.is_valid() {
            return Err(GeolocationError::position_unavailable(format!(
                "out of range: {}",
                self.coordinates
            )));
        }
        Ok(self.coordinates)
    }
}
