
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn zero_string() -> String {
    "0".to_string()
}

/// The slice of `bootstrap-static/` the tools actually read.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bootstrap {
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
    pub elements: Vec<Player>,
}

impl Bootstrap {
    /// Team lookup by id, for opponent and squad labels.
    pub fn teams_by_id(&self) -> HashMap<u32, &Team> {
        self.teams.iter().map(|t| (t.id, t)).collect()
    }

    /// The event flagged `is_current`, once the season is underway.
    pub fn current_event(&self) -> Option<&Event> {
        self.events.iter().find(|e| e.is_current)
    }

    /// Current gameweek id, defaulting to 1 before the season starts.
    pub fn current_gameweek(&self) -> u32 {
        self.current_event().map(|e| e.id).unwrap_or(1)
    }
}

/// One gameweek from the `events` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub deadline_time: Option<String>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub is_previous: bool,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub strength: i64,
    #[serde(default)]
    pub strength_overall_home: i64,
    #[serde(default)]
    pub strength_overall_away: i64,
}

/// One player row from `elements`.
///
/// The API serves several numerics as strings (`form`, ownership, the
/// expected stats); they stay strings here and are parsed where needed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub id: u32,
    pub web_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    pub team: u32,
    pub element_type: u8,
    pub now_cost: u32,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub minutes: i64,
    #[serde(default)]
    pub goals_scored: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub bonus: i64,
    #[serde(default = "zero_string")]
    pub form: String,
    #[serde(default = "zero_string")]
    pub points_per_game: String,
    #[serde(default = "zero_string")]
    pub selected_by_percent: String,
    #[serde(default = "zero_string")]
    pub expected_goals: String,
    #[serde(default = "zero_string")]
    pub expected_assists: String,
}

impl Player {
    /// Full display name, "first second".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }

    /// Price in millions; the API serves tenths.
    pub fn price(&self) -> f64 {
        f64::from(self.now_cost) / 10.0
    }
}

/// One fixture from `fixtures/`. `event` is `None` while unscheduled.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fixture {
    pub id: u64,
    #[serde(default)]
    pub event: Option<u32>,
    pub team_h: u32,
    pub team_a: u32,
    #[serde(default)]
    pub team_h_difficulty: u8,
    #[serde(default)]
    pub team_a_difficulty: u8,
    #[serde(default)]
    pub kickoff_time: Option<String>,
    #[serde(default)]
    pub finished: bool,
}

/// Manager entry payload from `entry/{id}/`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Entry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub player_first_name: Option<String>,
    #[serde(default)]
    pub player_last_name: Option<String>,
    #[serde(default)]
    pub player_region_name: Option<String>,
    #[serde(default)]
    pub started_event: Option<u32>,
    #[serde(default)]
    pub summary_overall_rank: Option<i64>,
    #[serde(default)]
    pub summary_overall_points: Option<i64>,
    #[serde(default)]
    pub summary_event_points: Option<i64>,
    #[serde(default)]
    pub last_deadline_value: Option<i64>,
    #[serde(default)]
    pub last_deadline_bank: Option<i64>,
    #[serde(default)]
    pub total_transfers: Option<i64>,
}

impl Entry {
    /// Manager display name with missing halves dropped.
    pub fn manager_name(&self) -> String {
        format!(
            "{} {}",
            self.player_first_name.as_deref().unwrap_or(""),
            self.player_last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Season-to-date rows from `entry/{id}/history/`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub current: Vec<HistoryRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryRow {
    pub event: u32,
    pub points: i64,
    pub total_points: i64,
    #[serde(default)]
    pub overall_rank: Option<i64>,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub bank: i64,
}

/// Squad picks from `entry/{id}/event/{gw}/picks/`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EventPicks {
    #[serde(default)]
    pub entry_history: Option<PicksHistory>,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PicksHistory {
    #[serde(default)]
    pub points: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pick {
    pub element: u32,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub multiplier: i64,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

/// Classic-league table from `leagues-classic/{id}/standings/`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassicLeague {
    #[serde(default)]
    pub league: LeagueInfo,
    #[serde(default)]
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueInfo {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StandingsPage {
    #[serde(default)]
    pub results: Vec<StandingRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingRow {
    pub rank: i64,
    pub entry_name: String,
    pub player_name: String,
    pub total: i64,
}
