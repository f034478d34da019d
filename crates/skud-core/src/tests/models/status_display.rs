use crate::{PresenceStatus, StatusDisplay};

#[test]
fn test_labels() {
    assert_eq!(StatusDisplay::label(PresenceStatus::Inside), "В здании");
    assert_eq!(StatusDisplay::label(PresenceStatus::Work), "На работе");
    assert_eq!(StatusDisplay::label(PresenceStatus::DayOff), "На сутки");
    assert_eq!(StatusDisplay::label(PresenceStatus::Request), "По заявлению");
}

#[test]
fn test_label_for_unknown_status_is_raw_value() {
    assert_eq!(StatusDisplay::label_for("work"), "На работе");
    assert_eq!(StatusDisplay::label_for("vacation"), "vacation");
}

#[test]
fn test_acknowledgements() {
    let work = StatusDisplay::acknowledgement(PresenceStatus::Work);
    assert_eq!(work.icon, "👋");
    assert_eq!(work.text, "Хорошего рабочего дня!");

    let back = StatusDisplay::acknowledgement(PresenceStatus::Inside);
    assert_eq!(back.icon, "🏠");
    assert_eq!(back.text, "С возвращением!");
}

#[test]
fn test_acknowledgement_for_unknown_status_is_generic() {
    let ack = StatusDisplay::acknowledgement_for("vacation");
    assert_eq!(ack.icon, "✅");
    assert_eq!(ack.text, "Готово!");
    assert_eq!(ack.to_string(), "✅ Готово!");
}
