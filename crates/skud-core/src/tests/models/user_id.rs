use crate::{Registration, UserId};

use serde_json::json;

#[test]
fn given_blank_value_when_new_then_rejected() {
    assert!(UserId::new("").is_err());
    assert!(UserId::new("   ").is_err());
    assert_eq!(UserId::new("u1").unwrap().as_str(), "u1");
}

#[test]
fn given_empty_user_id_when_deserialize_then_rejected() {
    assert!(serde_json::from_value::<UserId>(json!("")).is_err());

    let registration = serde_json::from_value::<Registration>(json!({
        "user_id": "",
        "full_name": "Jo Smith",
        "status": "inside"
    }));
    assert!(registration.is_err());
}

#[test]
fn given_user_id_when_serialized_then_plain_string() {
    let id = UserId::new("3f2a").unwrap();

    let value = serde_json::to_value(&id).unwrap();

    assert_eq!(value, json!("3f2a"));
    assert_eq!(serde_json::from_value::<UserId>(value).unwrap(), id);
}
