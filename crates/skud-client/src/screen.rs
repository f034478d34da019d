use serde::Serialize;
use skud_core::{Acknowledgement, PresenceStatus, StatusSnapshot};

const UNKNOWN_STATUS_LABEL: &str = "Нет данных";

/// The three screens of the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Register,
    Main(MainView),
    Confirm(Acknowledgement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Register,
    Main,
    Confirm,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Register => ScreenKind::Register,
            Self::Main(_) => ScreenKind::Main,
            Self::Confirm(_) => ScreenKind::Confirm,
        }
    }

    pub fn main_view(&self) -> Option<&MainView> {
        match self {
            Self::Main(view) => Some(view),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register => f.write_str("register"),
            Self::Main => f.write_str("main"),
            Self::Confirm => f.write_str("confirm"),
        }
    }
}

/// What the main screen shows.
///
/// Residents inside get the "leaving" actions; everyone else gets the
/// single "return" action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainView {
    pub full_name: String,
    /// Raw server status, `None` when it could not be fetched
    pub status: Option<String>,
    pub status_label: String,
    pub leaving_actions_visible: bool,
    pub return_action_visible: bool,
}

impl MainView {
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        let inside = snapshot.is_inside();
        Self {
            full_name: snapshot.full_name.clone(),
            status: Some(snapshot.status.clone()),
            status_label: snapshot.status_label().into_owned(),
            leaving_actions_visible: inside,
            return_action_visible: !inside,
        }
    }

    /// Status unknown until the next successful refresh; no actions offered.
    pub fn offline(full_name: Option<String>) -> Self {
        Self {
            full_name: full_name.unwrap_or_default(),
            status: None,
            status_label: UNKNOWN_STATUS_LABEL.to_string(),
            leaving_actions_visible: false,
            return_action_visible: false,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.status.is_none()
    }

    /// Whether the view shows the action that reports `status`
    pub fn offers(&self, status: PresenceStatus) -> bool {
        if status.is_inside() {
            self.return_action_visible
        } else {
            self.leaving_actions_visible
        }
    }
}
