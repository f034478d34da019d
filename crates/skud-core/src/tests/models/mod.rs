mod full_name;
mod presence_status;
mod status_display;
mod status_snapshot;
mod user_id;
