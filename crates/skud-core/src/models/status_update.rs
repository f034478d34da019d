use crate::{Coordinates, PresenceStatus};

use serde::Serialize;

/// Request body of `POST /api/status/{user_id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: PresenceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl StatusUpdate {
    pub fn new(status: PresenceStatus, coordinates: Option<Coordinates>) -> Self {
        Self {
            status,
            latitude: coordinates.map(|c| c.latitude),
            longitude: coordinates.map(|c| c.longitude),
        }
    }
}
