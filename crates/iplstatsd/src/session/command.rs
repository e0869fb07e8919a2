//! The closed command set clients can invoke.

/// Commands recognised by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List all team codes.
    GetTeams,
    /// List all fixtures.
    GetSchedule,
    /// Look up one player by name.
    GetPlayer,
    /// Close the session.
    Exit,
    /// Any unrecognised command value.
    Unknown,
}

impl Command {
    /// Derives a command from a request value, case-insensitively.
    ///
    /// Unmatched values map to [`Command::Unknown`] rather than an error;
    /// the dispatcher answers those with an error reply while the session
    /// continues.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "getteams" => Self::GetTeams,
            "getschedule" => Self::GetSchedule,
            "getplayer" => Self::GetPlayer,
            "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}
