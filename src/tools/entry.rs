//! Manager-entry tools: own team, arbitrary teams, history and leagues.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{FplError, Result};
use crate::fpl::types::{ClassicLeague, Entry, EntryHistory, EventPicks};
use crate::tools::ToolContext;

#[derive(Debug, Deserialize)]
pub struct GetTeamParams {
    pub team_id: u64,
    #[serde(default)]
    pub gameweek: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ManagerInfoParams {
    #[serde(default)]
    pub team_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct TeamHistoryParams {
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default = "default_history_gameweeks")]
    pub num_gameweeks: usize,
}

fn default_history_gameweeks() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct LeagueStandingsParams {
    pub league_id: u64,
}

/// Details of the configured manager's own team.
pub async fn get_my_team_details(ctx: &ToolContext) -> Result<Value> {
    let team_id = ctx
        .config
        .team_id
        .ok_or_else(|| FplError::config("FPL_TEAM_ID is not configured"))?;

    let raw = ctx.auth.fetch(&format!("entry/{team_id}/")).await?;
    let entry: Entry = serde_json::from_value(raw)?;

    let Some(team_name) = entry.name.clone() else {
        return Err(FplError::config(
            "FPL returned an empty entry; check that FPL_TEAM_ID matches the logged-in account",
        ));
    };

    Ok(json!({
        "team_name": team_name,
        "manager": entry.manager_name(),
        "overall_rank": entry.summary_overall_rank,
        "overall_points": entry.summary_overall_points,
        "gameweek_points": entry.summary_event_points,
        "team_value": tenths(entry.last_deadline_value),
        "bank": tenths(entry.last_deadline_bank),
        "total_transfers": entry.total_transfers,
        "team_id": team_id,
    }))
}

/// Any manager's team for a gameweek. The picks endpoint needs an
/// authenticated session; the entry profile itself is public.
pub async fn get_team(ctx: &ToolContext, params: GetTeamParams) -> Result<Value> {
    let entry: Entry = ctx
        .client
        .fetch_as_with_cache(&format!("entry/{}/", params.team_id), false)
        .await?;

    let gameweek = match params.gameweek {
        Some(gw) => gw,
        None => ctx.client.bootstrap().await?.current_gameweek(),
    };

    let raw = ctx
        .auth
        .fetch(&format!("entry/{}/event/{gameweek}/picks/", params.team_id))
        .await?;
    let picks: EventPicks = serde_json::from_value(raw)?;

    let manager = entry.manager_name();
    Ok(json!({
        "team_name": entry.name,
        "manager": manager,
        "overall_rank": entry.summary_overall_rank,
        "gameweek": gameweek,
        "gameweek_points": picks.entry_history.and_then(|h| h.points),
        "total_players": picks.picks.len(),
    }))
}

/// Public profile of a manager entry.
pub async fn get_manager_info(ctx: &ToolContext, params: ManagerInfoParams) -> Result<Value> {
    let team_id = params
        .team_id
        .or(ctx.config.team_id)
        .ok_or_else(|| FplError::validation("No team ID provided; pass team_id or set FPL_TEAM_ID"))?;

    let entry: Entry = ctx
        .client
        .fetch_as_with_cache(&format!("entry/{team_id}/"), false)
        .await?;

    let manager = entry.manager_name();
    Ok(json!({
        "manager_name": manager,
        "team_name": entry.name,
        "region": entry.player_region_name,
        "started_event": entry.started_event,
        "overall_rank": entry.summary_overall_rank,
        "overall_points": entry.summary_overall_points,
    }))
}

/// The most recent gameweeks of a manager entry's season history.
pub async fn get_team_history(ctx: &ToolContext, params: TeamHistoryParams) -> Result<Value> {
    let team_id = params
        .team_id
        .or(ctx.config.team_id)
        .ok_or_else(|| FplError::validation("No team ID provided; pass team_id or set FPL_TEAM_ID"))?;

    let raw = ctx.auth.fetch(&format!("entry/{team_id}/history/")).await?;
    let history: EntryHistory = serde_json::from_value(raw)?;

    let skip = history.current.len().saturating_sub(params.num_gameweeks);
    let rows: Vec<Value> = history
        .current
        .iter()
        .skip(skip)
        .map(|row| {
            json!({
                "gameweek": row.event,
                "points": row.points,
                "total_points": row.total_points,
                "rank": row.overall_rank,
                "value": row.value as f64 / 10.0,
                "bank": row.bank as f64 / 10.0,
            })
        })
        .collect();

    Ok(json!({"team_id": team_id, "history": rows}))
}

/// Top of a classic-league table.
pub async fn get_league_standings(ctx: &ToolContext, params: LeagueStandingsParams) -> Result<Value> {
    let league: ClassicLeague = ctx
        .client
        .fetch_as(&format!("leagues-classic/{}/standings/", params.league_id))
        .await?;

    let rows: Vec<Value> = league
        .standings
        .results
        .iter()
        .take(25)
        .map(|row| {
            json!({
                "rank": row.rank,
                "team_name": row.entry_name,
                "manager": row.player_name,
                "total_points": row.total,
            })
        })
        .collect();

    Ok(json!({
        "league_name": league.league.name,
        "total_teams": league.standings.results.len(),
        "standings": rows,
    }))
}

/// Report whether the configured credentials actually work.
///
/// Outcomes are data, not errors: a broken login shows up in the payload
/// so a client can display it instead of failing the call.
pub async fn check_fpl_authentication(ctx: &ToolContext) -> Result<Value> {
    let missing = ctx.config.missing_credentials();
    if !missing.is_empty() {
        return Ok(json!({
            "authenticated": false,
            "message": "Credentials not fully configured",
            "missing": missing,
        }));
    }

    let Some(team_id) = ctx.config.team_id else {
        return Ok(json!({
            "authenticated": false,
            "message": "Credentials not fully configured",
            "missing": [crate::config::FPL_TEAM_ID_ENV_VAR],
        }));
    };

    match ctx.auth.fetch(&format!("entry/{team_id}/")).await {
        Ok(raw) => {
            let entry: Entry = serde_json::from_value(raw)?;
            let manager = entry.manager_name();
            Ok(json!({
                "authenticated": true,
                "team_name": entry.name,
                "manager": manager,
                "team_id": team_id,
                "overall_rank": entry.summary_overall_rank,
                "overall_points": entry.summary_overall_points,
            }))
        }
        Err(err) => Ok(json!({
            "authenticated": false,
            "error": err.to_string(),
            "credentials_configured": true,
            "team_id": team_id,
        })),
    }
}

fn tenths(value: Option<i64>) -> f64 {
    value.unwrap_or(0) as f64 / 10.0
}
