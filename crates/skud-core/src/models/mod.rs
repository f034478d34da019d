pub mod absent_resident;
pub mod api_message;
pub mod coordinates;
pub mod full_name;
pub mod presence_stats;
pub mod presence_status;
pub mod registration;
pub mod resident;
pub mod status_display;
pub mod status_snapshot;
pub mod status_update;
pub mod user_id;
