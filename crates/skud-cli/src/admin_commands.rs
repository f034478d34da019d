use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum AdminCommands {
    /// Head count per status
    Stats,
    /// Everyone who is not inside
    Absent,
    /// Last known positions of absent residents
    Locations,
    /// All registered residents
    Users,
    /// Find residents by name
    Search {
        /// At least two characters
        query: String,
    },
    /// Delete a resident
    Delete {
        /// Numeric resident id, as printed by `users`
        id: i64,
    },
    /// Put every resident back inside
    Reset {
        /// Required, the reset cannot be undone
        #[arg(long)]
        yes: bool,
    },
}
