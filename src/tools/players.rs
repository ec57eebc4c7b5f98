//! Player-centric tools: search, comparison and filtered analysis.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{FplError, Result};
use crate::fpl::compute;
use crate::fpl::position::Position;
use crate::fpl::types::Player;
use crate::tools::player_filters::{
    self, metric_value, position_label, team_label, PlayerFilters,
};
use crate::tools::{fixtures, ToolContext};

/// Metrics compared by `compare_players`, in output order.
const COMPARE_METRICS: [&str; 10] = [
    "total_points",
    "form",
    "goals_scored",
    "assists",
    "bonus",
    "now_cost",
    "points_per_game",
    "expected_goals",
    "expected_assists",
    "minutes",
];

#[derive(Debug, Deserialize)]
pub struct SearchPlayerParams {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ComparePlayersParams {
    pub player_names: Vec<String>,
    #[serde(default = "default_include_fixtures")]
    pub include_fixtures: bool,
}

fn default_include_fixtures() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzePlayersParams {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub min_points: Option<i64>,
    #[serde(default)]
    pub min_form: Option<f64>,
    #[serde(default)]
    pub max_ownership: Option<f64>,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_sort_by() -> String {
    "total_points".to_string()
}

fn default_limit() -> usize {
    20
}

/// Find players by name and return their headline stats.
pub async fn search_player(ctx: &ToolContext, params: SearchPlayerParams) -> Result<Value> {
    let bootstrap = ctx.client.bootstrap().await?;
    let matches = player_filters::search_players(&bootstrap.elements, &params.name);
    if matches.is_empty() {
        return Err(FplError::PlayerNotFound { name: params.name });
    }

    let teams = bootstrap.teams_by_id();
    let players: Vec<Value> = matches
        .iter()
        .take(10)
        .map(|p| {
            json!({
                "id": p.id,
                "name": p.full_name(),
                "web_name": p.web_name,
                "team": team_label(&teams, p.team),
                "position": position_label(p.element_type),
                "price": p.price(),
                "total_points": p.total_points,
                "form": p.form,
                "points_per_game": p.points_per_game,
                "goals": p.goals_scored,
                "assists": p.assists,
                "bonus": p.bonus,
                "selected_by": format!("{}%", p.selected_by_percent),
                "expected_goals": p.expected_goals,
                "expected_assists": p.expected_assists,
            })
        })
        .collect();

    Ok(json!({"found": matches.len(), "players": players}))
}

/// Compare 2-5 players metric by metric and name the winners.
pub async fn compare_players(ctx: &ToolContext, params: ComparePlayersParams) -> Result<Value> {
    if params.player_names.len() < 2 || params.player_names.len() > 5 {
        return Err(FplError::validation(
            "player_names must list between 2 and 5 players",
        ));
    }

    let bootstrap = ctx.client.bootstrap().await?;
    let teams = bootstrap.teams_by_id();

    let mut selected: Vec<&Player> = Vec::new();
    for name in &params.player_names {
        let player = player_filters::find_player(&bootstrap.elements, name)
            .ok_or_else(|| FplError::PlayerNotFound { name: name.clone() })?;
        selected.push(player);
    }

    let players: Vec<Value> = selected
        .iter()
        .map(|p| {
            let mut block = serde_json::Map::new();
            block.insert("name".to_string(), json!(p.web_name));
            block.insert("team".to_string(), json!(team_label(&teams, p.team)));
            for metric in COMPARE_METRICS {
                block.insert(metric.to_string(), metric_json(p, metric));
            }
            Value::Object(block)
        })
        .collect();

    let mut best_performers = serde_json::Map::new();
    for metric in COMPARE_METRICS {
        let values: Vec<(&str, f64)> = selected
            .iter()
            .map(|p| (p.web_name.as_str(), metric_value(p, metric)))
            .collect();
        // Cheapest wins on cost; everywhere else the highest value does.
        let (winner, best) = metric_winner(&values, metric == "now_cost");
        best_performers.insert(metric.to_string(), json!({"player": winner, "value": best}));
    }

    let mut result = json!({
        "players": players,
        "best_performers": best_performers,
    });

    if params.include_fixtures {
        let all_fixtures = ctx.client.fixtures().await?;
        let summaries: Vec<Value> = selected
            .iter()
            .map(|p| {
                let upcoming = fixtures::upcoming_for_team(&all_fixtures, p.team, 5);
                let difficulties: Vec<u8> = upcoming
                    .iter()
                    .map(|f| fixtures::difficulty_for(f, p.team))
                    .collect();
                let opponents: Vec<String> = upcoming
                    .iter()
                    .map(|f| {
                        let home = f.team_h == p.team;
                        let opponent = if home { f.team_a } else { f.team_h };
                        let venue = if home { "H" } else { "A" };
                        let label = teams
                            .get(&opponent)
                            .map(|t| t.short_name.clone())
                            .unwrap_or_else(|| "?".to_string());
                        format!("{label} ({venue})")
                    })
                    .collect();
                let average = compute::average_difficulty(&difficulties);
                json!({
                    "player": p.web_name,
                    "upcoming": opponents,
                    "average_difficulty": compute::round_to(average, 2),
                    "difficulty_score": compute::difficulty_score(average),
                    "rating": compute::difficulty_rating(average),
                })
            })
            .collect();
        result["fixtures"] = json!(summaries);
    }

    Ok(result)
}

/// Filter the player pool and rank the survivors.
pub async fn analyze_players(ctx: &ToolContext, params: AnalyzePlayersParams) -> Result<Value> {
    let position = params
        .position
        .as_deref()
        .map(Position::from_str)
        .transpose()?;

    let bootstrap = ctx.client.bootstrap().await?;
    let teams = bootstrap.teams_by_id();

    let filters = PlayerFilters {
        position,
        team: params.team.clone(),
        min_price: params.min_price,
        max_price: params.max_price,
        min_points: params.min_points,
        min_form: params.min_form,
        max_ownership: params.max_ownership,
    };

    let mut matched: Vec<&Player> = bootstrap
        .elements
        .iter()
        .filter(|p| filters.matches(p, &teams))
        .collect();
    player_filters::sort_by_metric(&mut matched, &params.sort_by);

    let players: Vec<Value> = matched
        .iter()
        .take(params.limit)
        .map(|p| {
            json!({
                "name": p.web_name,
                "team": team_label(&teams, p.team),
                "position": position_label(p.element_type),
                "price": p.price(),
                "points": p.total_points,
                "form": p.form,
                "ownership": format!("{}%", p.selected_by_percent),
                "goals": p.goals_scored,
                "assists": p.assists,
            })
        })
        .collect();

    let mut applied = serde_json::Map::new();
    if let Some(position) = position {
        applied.insert("position".to_string(), json!(position.to_string()));
    }
    if let Some(team) = &params.team {
        applied.insert("team".to_string(), json!(team));
    }
    if let Some(min_price) = params.min_price {
        applied.insert("min_price".to_string(), json!(min_price));
    }
    if let Some(max_price) = params.max_price {
        applied.insert("max_price".to_string(), json!(max_price));
    }
    if let Some(min_points) = params.min_points {
        applied.insert("min_points".to_string(), json!(min_points));
    }
    if let Some(min_form) = params.min_form {
        applied.insert("min_form".to_string(), json!(min_form));
    }
    if let Some(max_ownership) = params.max_ownership {
        applied.insert("max_ownership".to_string(), json!(max_ownership));
    }

    Ok(json!({
        "total_found": matched.len(),
        "filters_applied": applied,
        "players": players,
    }))
}

fn metric_json(player: &Player, metric: &str) -> Value {
    match metric {
        "total_points" => json!(player.total_points),
        "minutes" => json!(player.minutes),
        "goals_scored" => json!(player.goals_scored),
        "assists" => json!(player.assists),
        "bonus" => json!(player.bonus),
        "now_cost" => json!(player.now_cost),
        "form" => json!(player.form),
        "points_per_game" => json!(player.points_per_game),
        "expected_goals" => json!(player.expected_goals),
        "expected_assists" => json!(player.expected_assists),
        _ => json!(0),
    }
}

fn metric_winner(values: &[(&str, f64)], lowest_wins: bool) -> (String, f64) {
    let seed = if lowest_wins {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    };
    let best = values.iter().map(|(_, v)| *v).fold(seed, |acc, v| {
        if lowest_wins {
            acc.min(v)
        } else {
            acc.max(v)
        }
    });

    let mut holders = values.iter().filter(|(_, v)| *v == best).map(|(name, _)| *name);
    let winner = holders.next().unwrap_or("tie").to_string();
    if holders.next().is_some() {
        ("tie".to_string(), best)
    } else {
        (winner, best)
    }
}
