use crate::geolocation::{GeolocationProvider, NoGeolocation, PositionOptions};

use std::sync::{Arc, Mutex};
use std::time::Instant;

use log::{debug, warn};
use skud_core::Coordinates;

/// Best-effort position lookup with a bounded wait and a short-lived cache.
pub struct Geolocator {
    provider: Arc<dyn GeolocationProvider>,
    options: PositionOptions,
    last_fix: Mutex<Option<(Instant, Coordinates)>>,
}

impl Geolocator {
    pub fn new(provider: Arc<dyn GeolocationProvider>, options: PositionOptions) -> Self {
        Self {
            provider,
            options,
            last_fix: Mutex::new(None),
        }
    }

    /// A locator that never produces a fix
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoGeolocation), PositionOptions::default())
    }

    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    /// Current position, or `None` if it cannot be had within the timeout.
    ///
    /// A fix younger than `maximum_age` is reused without asking the provider.
    pub async fn locate(&self) -> Option<Coordinates> {
        if let Some(cached) = self.cached_fix() {
            debug!("Reusing cached position {cached}");
            return Some(cached);
        }

        let lookup = self.provider.current_position(&self.options);
        match tokio::time::timeout(self.options.timeout, lookup).await {
            Ok(Ok(coordinates)) => {
                debug!("Position fix: {coordinates}");
                self.remember(coordinates);
                Some(coordinates)
            }
            Ok(Err(e)) => {
                warn!("Geolocation unavailable: {e}");
                None
            }
            Err(_) => {
                warn!("Geolocation timed out after {:?}", self.options.timeout);
                None
            }
        }
    }

    fn cached_fix(&self) -> Option<Coordinates> {
        let guard = self.last_fix.lock().ok()?;
        let (taken_at, coordinates) = (*guard)?;
        (taken_at.elapsed() < self.options.maximum_age).then_some(coordinates)
    }

    fn remember(&self, coordinates: Coordinates) {
        if let Ok(mut guard) = self.last_fix.lock() {
            *guard = Some((Instant::now(), coordinates));
        }
    }
}
