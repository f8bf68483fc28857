use serde::{Deserialize, Serialize};

/// A single fixture result, tagged with the round it belongs to.
/// Team identifiers are case-sensitive and compared as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub round: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,
}

/// The persisted unit: a named collection of matches. `matches` is
/// handed to the standings engine verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub matches: Vec<Match>,
}

/// One team's cumulative record as of a specific round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub position: u32,
}

impl TeamStanding {
    pub fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            position: 0,
        }
    }
}

/// The full table after every match of `round` (and all prior rounds)
/// has been applied. Each snapshot is an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStandings {
    pub round: u32,
    pub standings: Vec<TeamStanding>,
}

/// One point on a team's season trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPositionData {
    pub round: u32,
    pub position: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
}

/// A team's per-round snapshots across the season, ascending by round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeasonData {
    pub team: String,
    pub positions: Vec<TeamPositionData>,
}

/// Everything the transform stage produced for one tournament.
#[derive(Debug, Clone)]
pub struct TournamentTables {
    pub tournament: Tournament,
    pub rounds: Vec<RoundStandings>,
    pub series: Vec<TeamSeasonData>,
    pub standings_csv: String,
    pub final_table_csv: String,
    pub series_json: String,
}

/// The transform stage output handed to the load stage.
#[derive(Debug, Clone)]
pub struct TableResult {
    pub tournaments: Vec<TournamentTables>,
}
