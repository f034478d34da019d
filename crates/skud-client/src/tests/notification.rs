use crate::{Notification, Notifier};

use std::time::Duration;

#[test]
fn given_notification_when_within_duration_then_visible() {
    let notification = Notification::new("Нет связи с сервером", Duration::from_secs(3));
    let shown_at = notification.expires_at() - Duration::from_secs(3);

    assert!(notification.is_visible_at(shown_at));
    assert!(notification.is_visible_at(shown_at + Duration::from_millis(2999)));
}

#[test]
fn given_notification_when_duration_elapsed_then_hidden() {
    let notification = Notification::new("Нет связи с сервером", Duration::from_secs(3));

    assert!(!notification.is_visible_at(notification.expires_at()));
    assert!(!notification.is_visible_at(notification.expires_at() + Duration::from_secs(1)));
}

#[test]
fn given_new_notification_when_shown_then_replaces_previous() {
    let notifier = Notifier::new(Duration::from_secs(3));

    notifier.show("first");
    notifier.show("second");

    assert_eq!(notifier.current().unwrap().message(), "second");
}

#[test]
fn given_expired_notification_when_current_then_none() {
    let notifier = Notifier::new(Duration::from_millis(10));

    notifier.show("gone soon");
    std::thread::sleep(Duration::from_millis(30));

    assert!(notifier.current().is_none());
}

#[test]
fn given_notification_when_dismissed_then_none() {
    let notifier = Notifier::new(Duration::from_secs(3));

    notifier.show("dismiss me");
    notifier.dismiss();

    assert!(notifier.current().is_none());
}
