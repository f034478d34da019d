use crate::{StatusSnapshot, UserId};

use serde::Deserialize;

/// Response body of `POST /api/register`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registration {
    pub user_id: UserId,
    pub full_name: String,
    pub status: String,
}

impl From<Registration> for StatusSnapshot {
    fn from(registration: Registration) -> Self {
        StatusSnapshot {
            user_id: Some(registration.user_id.as_str().to_string()),
            full_name: registration.full_name,
            status: registration.status,
            last_update: None,
        }
    }
}
