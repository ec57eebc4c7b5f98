//! Player search, filtering and metric helpers shared by the tools.

use std::collections::HashMap;

use crate::fpl::compute::numeric;
use crate::fpl::position::Position;
use crate::fpl::types::{Player, Team};

/// Case-insensitive substring search over web and full names.
pub fn search_players<'a>(players: &'a [Player], name: &str) -> Vec<&'a Player> {
    let needle = name.to_lowercase();
    players
        .iter()
        .filter(|p| {
            p.web_name.to_lowercase().contains(&needle)
                || p.full_name().to_lowercase().contains(&needle)
        })
        .collect()
}

/// First player whose web name contains `name`, scanning bootstrap order.
pub fn find_player<'a>(players: &'a [Player], name: &str) -> Option<&'a Player> {
    let needle = name.to_lowercase();
    players
        .iter()
        .find(|p| p.web_name.to_lowercase().contains(&needle))
}

/// Multi-criteria player filter. Unset criteria always pass; an inverted
/// range simply matches nothing.
#[derive(Debug, Default)]
pub struct PlayerFilters {
    pub position: Option<Position>,
    pub team: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_points: Option<i64>,
    pub min_form: Option<f64>,
    pub max_ownership: Option<f64>,
}

impl PlayerFilters {
    /// Whether `player` passes every configured criterion.
    pub fn matches(&self, player: &Player, teams: &HashMap<u32, &Team>) -> bool {
        if let Some(position) = self.position {
            if player.element_type != position.element_type() {
                return false;
            }
        }
        if let Some(team) = &self.team {
            let name = teams
                .get(&player.team)
                .map(|t| t.name.as_str())
                .unwrap_or("");
            if !name.to_lowercase().contains(&team.to_lowercase()) {
                return false;
            }
        }
        let price = player.price();
        if let Some(min_price) = self.min_price {
            if price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if price > max_price {
                return false;
            }
        }
        if let Some(min_points) = self.min_points {
            if player.total_points < min_points {
                return false;
            }
        }
        if let Some(min_form) = self.min_form {
            if numeric(&player.form) < min_form {
                return false;
            }
        }
        if let Some(max_ownership) = self.max_ownership {
            if numeric(&player.selected_by_percent) > max_ownership {
                return false;
            }
        }
        true
    }
}

/// Numeric view of a player metric. String-typed metrics parse with a 0
/// fallback; an unknown metric reads as 0 for every player, which makes
/// sorting on it a stable no-op.
pub fn metric_value(player: &Player, metric: &str) -> f64 {
    match metric {
        "total_points" | "points" => player.total_points as f64,
        "minutes" => player.minutes as f64,
        "goals_scored" | "goals" => player.goals_scored as f64,
        "assists" => player.assists as f64,
        "bonus" => player.bonus as f64,
        "now_cost" => f64::from(player.now_cost),
        "price" => player.price(),
        "form" => numeric(&player.form),
        "points_per_game" => numeric(&player.points_per_game),
        "selected_by_percent" | "ownership" => numeric(&player.selected_by_percent),
        "expected_goals" => numeric(&player.expected_goals),
        "expected_assists" => numeric(&player.expected_assists),
        _ => 0.0,
    }
}

/// Sort descending on `metric`, except the cost metrics which sort
/// ascending so the cheapest options surface first.
pub fn sort_by_metric(players: &mut [&Player], metric: &str) {
    let ascending = matches!(metric, "now_cost" | "price");
    players.sort_by(|a, b| {
        let (va, vb) = (metric_value(a, metric), metric_value(b, metric));
        if ascending {
            va.total_cmp(&vb)
        } else {
            vb.total_cmp(&va)
        }
    });
}

/// Team display name with a placeholder for ids the bootstrap lacks.
pub fn team_label(teams: &HashMap<u32, &Team>, id: u32) -> String {
    teams
        .get(&id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "?".to_string())
}

/// Position short code for an `element_type`, tolerating codes the API
/// may add later.
pub fn position_label(element_type: u8) -> String {
    Position::try_from_element_type(element_type)
        .map(|p| p.to_string())
        .unwrap_or_else(|_| "?".to_string())
}
