//! Fixture-difficulty tools for players and teams.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{FplError, Result};
use crate::fpl::compute;
use crate::fpl::types::Fixture;
use crate::tools::player_filters::{find_player, team_label};
use crate::tools::ToolContext;

#[derive(Debug, Deserialize)]
pub struct PlayerFixturesParams {
    pub player_name: String,
    #[serde(default = "default_num_fixtures")]
    pub num_fixtures: usize,
}

fn default_num_fixtures() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeFixturesParams {
    #[serde(default = "default_entity_type")]
    pub entity_type: String,
    #[serde(default)]
    pub entity_name: String,
    #[serde(default = "default_num_gameweeks")]
    pub num_gameweeks: u32,
}

fn default_entity_type() -> String {
    "team".to_string()
}

fn default_num_gameweeks() -> u32 {
    5
}

/// A team's next unfinished fixtures, in season order.
pub fn upcoming_for_team(fixtures: &[Fixture], team_id: u32, limit: usize) -> Vec<&Fixture> {
    fixtures
        .iter()
        .filter(|f| (f.team_h == team_id || f.team_a == team_id) && !f.finished)
        .take(limit)
        .collect()
}

/// The difficulty `team_id` faces in `fixture`.
pub fn difficulty_for(fixture: &Fixture, team_id: u32) -> u8 {
    if fixture.team_h == team_id {
        fixture.team_h_difficulty
    } else {
        fixture.team_a_difficulty
    }
}

/// Upcoming fixture difficulty for a single player.
pub async fn analyze_player_fixtures(
    ctx: &ToolContext,
    params: PlayerFixturesParams,
) -> Result<Value> {
    let bootstrap = ctx.client.bootstrap().await?;
    let player = find_player(&bootstrap.elements, &params.player_name).ok_or_else(|| {
        FplError::PlayerNotFound {
            name: params.player_name.clone(),
        }
    })?;

    let fixtures = ctx.client.fixtures().await?;
    let teams = bootstrap.teams_by_id();
    let upcoming = upcoming_for_team(&fixtures, player.team, params.num_fixtures);

    let mut difficulties = Vec::new();
    let rows: Vec<Value> = upcoming
        .iter()
        .map(|f| {
            let home = f.team_h == player.team;
            let opponent = if home { f.team_a } else { f.team_h };
            let difficulty = difficulty_for(f, player.team);
            difficulties.push(difficulty);
            json!({
                "gameweek": f.event,
                "opponent": team_label(&teams, opponent),
                "location": if home { "Home" } else { "Away" },
                "difficulty": difficulty,
                "kickoff": f.kickoff_time,
            })
        })
        .collect();

    let average = compute::average_difficulty(&difficulties);
    Ok(json!({
        "player": {
            "name": player.web_name,
            "team": team_label(&teams, player.team),
        },
        "fixtures": rows,
        "summary": {
            "average_difficulty": compute::round_to(average, 2),
            "difficulty_score": compute::difficulty_score(average),
            "rating": compute::difficulty_rating(average),
        }
    }))
}

/// Fixture difficulty for a team over the coming gameweeks.
pub async fn analyze_fixtures(ctx: &ToolContext, params: AnalyzeFixturesParams) -> Result<Value> {
    if params.entity_type != "team" {
        return Err(FplError::validation(format!(
            "Only team analysis is supported, got '{}'",
            params.entity_type
        )));
    }

    let bootstrap = ctx.client.bootstrap().await?;
    let needle = params.entity_name.to_lowercase();
    let team = bootstrap
        .teams
        .iter()
        .find(|t| t.name.to_lowercase().contains(&needle))
        .ok_or_else(|| FplError::TeamNotFound {
            name: params.entity_name.clone(),
        })?;

    let fixtures = ctx.client.fixtures().await?;
    let teams = bootstrap.teams_by_id();
    let current = bootstrap.current_gameweek();
    let window_end = current.saturating_add(params.num_gameweeks);

    let mut difficulties = Vec::new();
    let rows: Vec<Value> = fixtures
        .iter()
        .filter(|f| {
            (f.team_h == team.id || f.team_a == team.id)
                && f.event.is_some_and(|e| e >= current && e < window_end)
        })
        .map(|f| {
            let home = f.team_h == team.id;
            let opponent = if home { f.team_a } else { f.team_h };
            let difficulty = difficulty_for(f, team.id);
            difficulties.push(difficulty);
            json!({
                "gameweek": f.event,
                "opponent": team_label(&teams, opponent),
                "location": if home { "Home" } else { "Away" },
                "difficulty": difficulty,
            })
        })
        .collect();

    let average = compute::average_difficulty(&difficulties);
    Ok(json!({
        "entity": {"type": "team", "name": team.name},
        "fixtures": rows,
        "average_difficulty": compute::round_to(average, 2),
    }))
}
