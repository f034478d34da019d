use std::str::FromStr;

use serde::Deserialize;

/// What to show when the startup status fetch fails for a reason other
/// than an unknown identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchFailurePolicy {
    /// Registration screen; the stored identity is kept
    #[default]
    Register,
    /// Main screen with an unknown status until the next refresh
    Offline,
}

impl FromStr for FetchFailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "register" => Ok(Self::Register),
            "offline" => Ok(Self::Offline),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for FetchFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register => f.write_str("register"),
            Self::Offline => f.write_str("offline"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StartupConfig {
    pub on_fetch_failure: FetchFailurePolicy,
}
