use crate::{Coordinates, PresenceStatus, Registration, StatusSnapshot, StatusUpdate};

use serde_json::json;

#[test]
fn test_snapshot_deserializes_minimal_body() {
    let snapshot: StatusSnapshot =
        serde_json::from_value(json!({"full_name": "Ann Lee", "status": "inside"})).unwrap();

    assert_eq!(snapshot.full_name, "Ann Lee");
    assert!(snapshot.is_inside());
    assert_eq!(snapshot.status_label(), "В здании");
    assert!(snapshot.user_id.is_none());
}

#[test]
fn test_snapshot_with_unknown_status_is_not_inside() {
    let snapshot: StatusSnapshot =
        serde_json::from_value(json!({"full_name": "Ann Lee", "status": "vacation"})).unwrap();

    assert_eq!(snapshot.presence_status(), None);
    assert!(!snapshot.is_inside());
    assert_eq!(snapshot.status_label(), "vacation");
}

#[test]
fn test_registration_converts_to_snapshot() {
    let registration: Registration = serde_json::from_value(json!({
        "user_id": "u1",
        "full_name": "Jo Smith",
        "status": "work"
    }))
    .unwrap();

    let snapshot = StatusSnapshot::from(registration);
    assert_eq!(snapshot.user_id.as_deref(), Some("u1"));
    assert_eq!(snapshot.presence_status(), Some(PresenceStatus::Work));
}

#[test]
fn test_status_update_omits_missing_coordinates() {
    let body = serde_json::to_value(StatusUpdate::new(PresenceStatus::Work, None)).unwrap();
    assert_eq!(body, json!({"status": "work"}));
}

#[test]
fn test_status_update_includes_coordinates() {
    let body = serde_json::to_value(StatusUpdate::new(
        PresenceStatus::DayOff,
        Some(Coordinates::new(55.75, 37.61)),
    ))
    .unwrap();
    assert_eq!(
        body,
        json!({"status": "day_off", "latitude": 55.75, "longitude": 37.61})
    );
}
