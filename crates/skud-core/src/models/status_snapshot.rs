use crate::{PresenceStatus, StatusDisplay};

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server view of a resident, as returned by the status endpoints.
///
/// `status` stays a raw string so an unexpected server value still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub full_name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl StatusSnapshot {
    pub fn presence_status(&self) -> Option<PresenceStatus> {
        PresenceStatus::from_str(&self.status).ok()
    }

    pub fn is_inside(&self) -> bool {
        self.presence_status()
            .is_some_and(|status| status.is_inside())
    }

    pub fn status_label(&self) -> Cow<'_, str> {
        StatusDisplay::label_for(&self.status)
    }
}
