//! Read-only MCP resources: plain-text snapshots of FPL data.

use serde_json::{json, Value};

use crate::error::{FplError, Result};
use crate::fpl::compute;
use crate::tools::player_filters::team_label;
use crate::tools::ToolContext;

/// How far ahead the blank/double resources scan.
const RESOURCE_SCAN_GAMEWEEKS: u32 = 10;

/// The resource manifest served by `resources/list`.
pub fn resource_manifest() -> Vec<Value> {
    vec![
        resource_entry(
            "fpl://static/players",
            "All Players",
            "FPL players with price, points and form",
        ),
        resource_entry(
            "fpl://static/teams",
            "All Teams",
            "Premier League teams with strength ratings",
        ),
        resource_entry(
            "fpl://gameweeks/current",
            "Current Gameweek",
            "The gameweek in progress with its deadline",
        ),
        resource_entry(
            "fpl://gameweeks/all",
            "All Gameweeks",
            "Season gameweeks with deadlines",
        ),
        resource_entry(
            "fpl://fixtures",
            "Upcoming Fixtures",
            "The next scheduled fixtures",
        ),
        resource_entry(
            "fpl://gameweeks/blank",
            "Blank Gameweeks",
            "Gameweeks where teams have no fixture",
        ),
        resource_entry(
            "fpl://gameweeks/double",
            "Double Gameweeks",
            "Gameweeks where teams play twice",
        ),
    ]
}

fn resource_entry(uri: &str, name: &str, description: &str) -> Value {
    json!({
        "uri": uri,
        "name": name,
        "description": description,
        "mimeType": "text/plain",
    })
}

/// Render a resource URI to text.
pub async fn read_resource(ctx: &ToolContext, uri: &str) -> Result<String> {
    match uri {
        "fpl://static/players" => players_text(ctx).await,
        "fpl://static/teams" => teams_text(ctx).await,
        "fpl://gameweeks/current" => current_gameweek_text(ctx).await,
        "fpl://gameweeks/all" => gameweeks_text(ctx).await,
        "fpl://fixtures" => fixtures_text(ctx).await,
        "fpl://gameweeks/blank" => classified_text(ctx, "Blank gameweeks", true).await,
        "fpl://gameweeks/double" => classified_text(ctx, "Double gameweeks", false).await,
        _ => Err(FplError::validation(format!("Unknown resource: {uri}"))),
    }
}

async fn players_text(ctx: &ToolContext) -> Result<String> {
    let bootstrap = ctx.client.bootstrap().await?;
    let teams = bootstrap.teams_by_id();
    let lines: Vec<String> = bootstrap
        .elements
        .iter()
        .take(100)
        .map(|p| {
            format!(
                "{} ({}) - £{:.1}m, {}pts, Form: {}",
                p.web_name,
                team_label(&teams, p.team),
                p.price(),
                p.total_points,
                p.form
            )
        })
        .collect();
    Ok(format!(
        "Showing {}/{} players:\n{}",
        lines.len(),
        bootstrap.elements.len(),
        lines.join("\n")
    ))
}

async fn teams_text(ctx: &ToolContext) -> Result<String> {
    let bootstrap = ctx.client.bootstrap().await?;
    let lines: Vec<String> = bootstrap
        .teams
        .iter()
        .map(|t| {
            format!(
                "{} - Strength: {} (H:{}, A:{})",
                t.name, t.strength, t.strength_overall_home, t.strength_overall_away
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

async fn current_gameweek_text(ctx: &ToolContext) -> Result<String> {
    let bootstrap = ctx.client.bootstrap().await?;
    Ok(match bootstrap.current_event() {
        Some(event) => format!(
            "Gameweek {}: {}\nDeadline: {}\nFinished: {}",
            event.id,
            event.name,
            event.deadline_time.as_deref().unwrap_or("TBC"),
            event.finished
        ),
        None => "No current gameweek".to_string(),
    })
}

async fn gameweeks_text(ctx: &ToolContext) -> Result<String> {
    let bootstrap = ctx.client.bootstrap().await?;
    let lines: Vec<String> = bootstrap
        .events
        .iter()
        .take(10)
        .map(|e| {
            format!(
                "GW{}: {} (Deadline: {})",
                e.id,
                e.name,
                e.deadline_time.as_deref().unwrap_or("TBC")
            )
        })
        .collect();
    Ok(format!(
        "Showing {}/{} gameweeks:\n{}",
        lines.len(),
        bootstrap.events.len(),
        lines.join("\n")
    ))
}

async fn fixtures_text(ctx: &ToolContext) -> Result<String> {
    let bootstrap = ctx.client.bootstrap().await?;
    let fixtures = ctx.client.fixtures().await?;
    let teams = bootstrap.teams_by_id();

    let lines: Vec<String> = fixtures
        .iter()
        .filter(|f| f.event.is_some())
        .take(20)
        .map(|f| {
            let kickoff = f
                .kickoff_time
                .as_deref()
                .map(|k| k.get(..10).unwrap_or(k))
                .unwrap_or("TBC");
            format!(
                "GW{}: {} vs {} ({})",
                f.event.unwrap_or(0),
                team_label(&teams, f.team_h),
                team_label(&teams, f.team_a),
                kickoff
            )
        })
        .collect();
    Ok(format!("Next {} fixtures:\n{}", lines.len(), lines.join("\n")))
}

async fn classified_text(ctx: &ToolContext, title: &str, blanks: bool) -> Result<String> {
    let bootstrap = ctx.client.bootstrap().await?;
    let fixtures = ctx.client.fixtures().await?;
    let start = bootstrap.current_gameweek();

    let reports = if blanks {
        compute::blank_gameweeks(&fixtures, &bootstrap.teams, start, RESOURCE_SCAN_GAMEWEEKS)
    } else {
        compute::double_gameweeks(&fixtures, &bootstrap.teams, start, RESOURCE_SCAN_GAMEWEEKS)
    };

    if reports.is_empty() {
        return Ok(format!("{title}:\nNone found"));
    }
    let lines: Vec<String> = reports
        .iter()
        .map(|r| format!("GW{}: {}", r.gameweek, r.teams.join(", ")))
        .collect();
    Ok(format!("{title}:\n{}", lines.join("\n")))
}
