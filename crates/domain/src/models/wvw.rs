use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `/v2/wvw/matches/:id`, trimmed to the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Match id, e.g. `1-4`.
    pub id: String,
    /// Start of the matchup.
    pub start_time: DateTime<Utc>,
    /// End of the matchup.
    pub end_time: DateTime<Utc>,
    /// Current scores.
    pub scores: TeamValues,
    /// Host world per team.
    pub worlds: TeamValues,
    /// Total kills.
    pub kills: TeamValues,
    /// Total deaths.
    pub deaths: TeamValues,
}

/// One value per team colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamValues {
    /// Red team.
    pub red: u64,
    /// Blue team.
    pub blue: u64,
    /// Green team.
    pub green: u64,
}
