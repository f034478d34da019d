use serde::{Deserialize, Serialize};

/// Entry of `GET /api/users` and `GET /api/users/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    pub id: i64,
    pub uuid: String,
    pub full_name: String,
    pub status: String,
    pub status_label: String,
}
