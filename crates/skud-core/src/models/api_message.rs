use serde::{Deserialize, Serialize};

/// Plain acknowledgement returned by the admin endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
