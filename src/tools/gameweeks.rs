//! Gameweek status and blank/double classification tools.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::fpl::compute;
use crate::tools::ToolContext;

#[derive(Debug, Deserialize)]
pub struct GameweekWindowParams {
    #[serde(default = "default_num_gameweeks")]
    pub num_gameweeks: u32,
}

fn default_num_gameweeks() -> u32 {
    5
}

/// Current, next and previous gameweek as flagged by the bootstrap.
pub async fn get_gameweek_status(ctx: &ToolContext) -> Result<Value> {
    let bootstrap = ctx.client.bootstrap().await?;

    let current = bootstrap.events.iter().find(|e| e.is_current).map(|e| {
        json!({
            "id": e.id,
            "name": e.name,
            "deadline": e.deadline_time,
            "finished": e.finished,
        })
    });
    let next = bootstrap.events.iter().find(|e| e.is_next).map(|e| {
        json!({"id": e.id, "name": e.name, "deadline": e.deadline_time})
    });
    let previous = bootstrap
        .events
        .iter()
        .find(|e| e.is_previous)
        .map(|e| json!({"id": e.id, "name": e.name}));

    Ok(json!({"current": current, "next": next, "previous": previous}))
}

/// Gameweeks ahead where at least one team has no fixture.
pub async fn get_blank_gameweeks(ctx: &ToolContext, params: GameweekWindowParams) -> Result<Value> {
    let bootstrap = ctx.client.bootstrap().await?;
    let fixtures = ctx.client.fixtures().await?;

    let reports = compute::blank_gameweeks(
        &fixtures,
        &bootstrap.teams,
        bootstrap.current_gameweek(),
        params.num_gameweeks,
    );
    Ok(json!({"blank_gameweeks": reports}))
}

/// Gameweeks ahead where at least one team plays twice.
pub async fn get_double_gameweeks(ctx: &ToolContext, params: GameweekWindowParams) -> Result<Value> {
    let bootstrap = ctx.client.bootstrap().await?;
    let fixtures = ctx.client.fixtures().await?;

    let reports = compute::double_gameweeks(
        &fixtures,
        &bootstrap.teams,
        bootstrap.current_gameweek(),
        params.num_gameweeks,
    );
    Ok(json!({"double_gameweeks": reports}))
}
