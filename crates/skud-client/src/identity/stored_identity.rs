use serde::{Deserialize, Serialize};
use skud_core::UserId;

pub const SCHEMA_VERSION: i32 = 1;

/// Identity persisted on this device after a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub user_id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    pub saved_at: String,
    pub schema_version: i32,
}

impl StoredIdentity {
    pub fn new(user_id: UserId, full_name: Option<String>) -> Self {
        Self {
            user_id,
            full_name,
            saved_at: chrono::Utc::now().to_rfc3339(),
            schema_version: SCHEMA_VERSION,
        }
    }
}
