pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::absent_resident::AbsentResident;
pub use models::api_message::ApiMessage;
pub use models::coordinates::Coordinates;
pub use models::full_name::{FullName, MIN_FULL_NAME_CHARS};
pub use models::presence_stats::PresenceStats;
pub use models::presence_status::PresenceStatus;
pub use models::registration::Registration;
pub use models::resident::Resident;
pub use models::status_display::{Acknowledgement, StatusDisplay};
pub use models::status_snapshot::StatusSnapshot;
pub use models::status_update::StatusUpdate;
pub use models::user_id::UserId;
