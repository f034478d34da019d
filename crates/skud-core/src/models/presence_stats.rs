use serde::{Deserialize, Serialize};

/// Head count per status, from `GET /api/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceStats {
    pub inside: u32,
    pub work: u32,
    pub day_off: u32,
    pub request: u32,
    pub total: u32,
}

impl PresenceStats {
    pub fn absent_total(&self) -> u32 {
        self.work + self.day_off + self.request
    }
}
