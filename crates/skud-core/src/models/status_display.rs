//! Human-readable rendering of presence statuses.
//!
//! Labels are shown on the main screen; acknowledgements are shown on the
//! confirmation screen after a successful status change.

use crate::PresenceStatus;

use std::borrow::Cow;
use std::str::FromStr;

use serde::Serialize;

const FALLBACK_ACKNOWLEDGEMENT: Acknowledgement = Acknowledgement {
    icon: "✅",
    text: "Готово!",
};

/// Icon and message pair for the confirmation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub icon: &'static str,
    pub text: &'static str,
}

impl std::fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}

/// Static status → text mapping.
pub struct StatusDisplay;

impl StatusDisplay {
    pub fn label(status: PresenceStatus) -> &'static str {
        match status {
            PresenceStatus::Inside => "В здании",
            PresenceStatus::Work => "На работе",
            PresenceStatus::DayOff => "На сутки",
            PresenceStatus::Request => "По заявлению",
        }
    }

    pub fn acknowledgement(status: PresenceStatus) -> Acknowledgement {
        match status {
            PresenceStatus::Work => Acknowledgement {
                icon: "👋",
                text: "Хорошего рабочего дня!",
            },
            PresenceStatus::DayOff => Acknowledgement {
                icon: "🌙",
                text: "Хорошего отдыха!",
            },
            PresenceStatus::Request => Acknowledgement {
                icon: "📋",
                text: "Хорошего дня!",
            },
            PresenceStatus::Inside => Acknowledgement {
                icon: "🏠",
                text: "С возвращением!",
            },
        }
    }

    /// Label for a status string as reported by the server.
    ///
    /// Unknown values are shown verbatim.
    pub fn label_for(raw: &str) -> Cow<'_, str> {
        match PresenceStatus::from_str(raw) {
            Ok(status) => Cow::Borrowed(Self::label(status)),
            Err(_) => Cow::Borrowed(raw),
        }
    }

    /// Acknowledgement for a status string, falling back to a generic one.
    pub fn acknowledgement_for(raw: &str) -> Acknowledgement {
        PresenceStatus::from_str(raw)
            .map(Self::acknowledgement)
            .unwrap_or(FALLBACK_ACKNOWLEDGEMENT)
    }
}
