use crate::Coordinates;

use serde::{Deserialize, Serialize};

/// Entry of `GET /api/absent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsentResident {
    pub full_name: String,
    pub status: String,
    pub status_label: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub has_location: bool,
}

impl AbsentResident {
    /// Last known position, if the server has both halves of it
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }
}
