use crate::PresenceStatus;

use std::str::FromStr;

#[test]
fn test_presence_status_as_str() {
    assert_eq!(PresenceStatus::Inside.as_str(), "inside");
    assert_eq!(PresenceStatus::Work.as_str(), "work");
    assert_eq!(PresenceStatus::DayOff.as_str(), "day_off");
    assert_eq!(PresenceStatus::Request.as_str(), "request");
}

#[test]
fn test_presence_status_from_str_roundtrips_every_variant() {
    for status in PresenceStatus::ALL {
        assert_eq!(PresenceStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_presence_status_from_str_rejects_unknown() {
    assert!(PresenceStatus::from_str("outside").is_err());
    assert!(PresenceStatus::from_str("day-off").is_err());
    assert!(PresenceStatus::from_str("").is_err());
}

#[test]
fn test_presence_status_serializes_snake_case() {
    let json = serde_json::to_string(&PresenceStatus::DayOff).unwrap();
    assert_eq!(json, "\"day_off\"");
}

#[test]
fn test_presence_status_default_is_inside() {
    assert_eq!(PresenceStatus::default(), PresenceStatus::Inside);
    assert!(PresenceStatus::default().is_inside());
    assert!(!PresenceStatus::Work.is_inside());
}
