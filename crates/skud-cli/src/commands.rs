use crate::admin_commands::AdminCommands;

use clap::{Subcommand, ValueEnum};
use skud_core::PresenceStatus;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show the current screen
    Show,

    /// Register this device
    Register {
        /// Full name, may be given unquoted
        #[arg(required = true, num_args = 1..)]
        full_name: Vec<String>,
    },

    /// Report leaving the building
    Leave {
        #[arg(value_enum)]
        status: LeaveStatus,
    },

    /// Report being back inside
    Return,

    /// Re-sync with the server and show the main screen
    Back,

    /// Interactive session over stdin
    Shell,

    /// Duty officer operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LeaveStatus {
    Work,
    DayOff,
    Request,
}

impl From<LeaveStatus> for PresenceStatus {
    fn from(status: LeaveStatus) -> Self {
        match status {
            LeaveStatus::Work => PresenceStatus::Work,
            LeaveStatus::DayOff => PresenceStatus::DayOff,
            LeaveStatus::Request => PresenceStatus::Request,
        }
    }
}
