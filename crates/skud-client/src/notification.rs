//! Transient, auto-dismissing error notifications.

use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.duration
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at()
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}

/// Holds at most one notification; a new one replaces the old.
#[derive(Debug)]
pub struct Notifier {
    duration: Duration,
    current: Mutex<Option<Notification>>,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: Mutex::new(None),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        if let Ok(mut guard) = self.current.lock() {
            *guard = Some(Notification::new(message, self.duration));
        }
    }

    /// The visible notification, if any. Expired ones are dropped.
    pub fn current(&self) -> Option<Notification> {
        let mut guard = self.current.lock().ok()?;
        if guard.as_ref().is_some_and(|n| !n.is_visible()) {
            *guard = None;
        }
        guard.clone()
    }

    pub fn dismiss(&self) {
        if let Ok(mut guard) = self.current.lock() {
            *guard = None;
        }
    }
}
