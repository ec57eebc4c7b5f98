//! MCP tool implementations over the FPL API.

pub mod entry;
pub mod fixtures;
pub mod gameweeks;
pub mod player_filters;
pub mod players;
pub mod resources;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{FplError, Result};
use crate::fpl::auth::Authenticator;
use crate::fpl::http::FplClient;

/// Shared state handed to every tool call.
pub struct ToolContext {
    pub client: FplClient,
    pub auth: Authenticator,
    pub config: Config,
}

impl ToolContext {
    /// Context against the production FPL endpoints.
    pub fn new(config: Config) -> Result<Self> {
        let client = FplClient::new()?;
        let auth = Authenticator::new(&config)?;
        Ok(ToolContext {
            client,
            auth,
            config,
        })
    }

    /// Context against alternate endpoints.
    pub fn with_base_urls(config: Config, api_base: &str, login_url: &str) -> Result<Self> {
        let client = FplClient::with_base_url(api_base)?;
        let auth = Authenticator::with_urls(&config, login_url, api_base)?;
        Ok(ToolContext {
            client,
            auth,
            config,
        })
    }
}

/// One entry in the `tools/list` manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl Tool {
    fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Tool {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Execute a tool by its wire name.
pub async fn dispatch(ctx: &ToolContext, name: &str, arguments: Value) -> Result<Value> {
    match name {
        "search_player" => players::search_player(ctx, parse_params(arguments)?).await,
        "compare_players" => players::compare_players(ctx, parse_params(arguments)?).await,
        "analyze_players" => players::analyze_players(ctx, parse_params(arguments)?).await,
        "get_gameweek_status" => gameweeks::get_gameweek_status(ctx).await,
        "get_blank_gameweeks" => gameweeks::get_blank_gameweeks(ctx, parse_params(arguments)?).await,
        "get_double_gameweeks" => {
            gameweeks::get_double_gameweeks(ctx, parse_params(arguments)?).await
        }
        "analyze_player_fixtures" => {
            fixtures::analyze_player_fixtures(ctx, parse_params(arguments)?).await
        }
        "analyze_fixtures" => fixtures::analyze_fixtures(ctx, parse_params(arguments)?).await,
        "get_my_team_details" => entry::get_my_team_details(ctx).await,
        "get_team" => entry::get_team(ctx, parse_params(arguments)?).await,
        "get_manager_info" => entry::get_manager_info(ctx, parse_params(arguments)?).await,
        "get_team_history" => entry::get_team_history(ctx, parse_params(arguments)?).await,
        "get_league_standings" => entry::get_league_standings(ctx, parse_params(arguments)?).await,
        "check_fpl_authentication" => entry::check_fpl_authentication(ctx).await,
        _ => Err(FplError::validation(format!("Unknown tool: {name}"))),
    }
}

fn parse_params<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| FplError::validation(format!("Invalid arguments: {e}")))
}

/// The full tool manifest served by `tools/list`.
pub fn tool_manifest() -> Vec<Tool> {
    vec![
        Tool::new(
            "search_player",
            "Search for FPL players by name and return their key stats",
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Full or partial player name, case-insensitive"
                    }
                },
                "required": ["name"]
            }),
        ),
        Tool::new(
            "get_gameweek_status",
            "Current, next and previous gameweek with deadlines",
            json!({"type": "object", "properties": {}}),
        ),
        Tool::new(
            "analyze_players",
            "Filter and rank players by position, team, price, form, ownership or points",
            json!({
                "type": "object",
                "properties": {
                    "position": {
                        "type": "string",
                        "description": "GKP, DEF, MID or FWD (long names accepted)"
                    },
                    "team": {"type": "string", "description": "Team name, full or partial"},
                    "min_price": {"type": "number", "description": "Minimum price in millions"},
                    "max_price": {"type": "number", "description": "Maximum price in millions"},
                    "min_points": {"type": "integer", "description": "Minimum total points"},
                    "min_form": {"type": "number", "description": "Minimum form rating"},
                    "max_ownership": {
                        "type": "number",
                        "description": "Maximum ownership percentage (differential hunting)"
                    },
                    "sort_by": {
                        "type": "string",
                        "description": "Metric to sort by",
                        "default": "total_points"
                    },
                    "limit": {"type": "integer", "description": "Rows to return", "default": 20}
                }
            }),
        ),
        Tool::new(
            "analyze_player_fixtures",
            "Upcoming fixture difficulty for a single player",
            json!({
                "type": "object",
                "properties": {
                    "player_name": {"type": "string", "description": "Player to analyze"},
                    "num_fixtures": {
                        "type": "integer",
                        "description": "How many upcoming fixtures to include",
                        "default": 5
                    }
                },
                "required": ["player_name"]
            }),
        ),
        Tool::new(
            "get_blank_gameweeks",
            "Upcoming gameweeks where teams have no fixture",
            json!({
                "type": "object",
                "properties": {
                    "num_gameweeks": {
                        "type": "integer",
                        "description": "Gameweeks ahead to scan",
                        "default": 5
                    }
                }
            }),
        ),
        Tool::new(
            "get_double_gameweeks",
            "Upcoming gameweeks where teams play more than once",
            json!({
                "type": "object",
                "properties": {
                    "num_gameweeks": {
                        "type": "integer",
                        "description": "Gameweeks ahead to scan",
                        "default": 5
                    }
                }
            }),
        ),
        Tool::new(
            "analyze_fixtures",
            "Fixture difficulty over the coming gameweeks for a team",
            json!({
                "type": "object",
                "properties": {
                    "entity_type": {
                        "type": "string",
                        "description": "What to analyze; only 'team' is supported",
                        "default": "team"
                    },
                    "entity_name": {"type": "string", "description": "Team name, full or partial"},
                    "num_gameweeks": {
                        "type": "integer",
                        "description": "Gameweeks ahead to scan",
                        "default": 5
                    }
                },
                "required": ["entity_name"]
            }),
        ),
        Tool::new(
            "compare_players",
            "Side-by-side comparison of 2-5 players with per-metric winners",
            json!({
                "type": "object",
                "properties": {
                    "player_names": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Between 2 and 5 player names"
                    },
                    "include_fixtures": {
                        "type": "boolean",
                        "description": "Append an upcoming-fixture summary per player",
                        "default": true
                    }
                },
                "required": ["player_names"]
            }),
        ),
        Tool::new(
            "get_my_team_details",
            "Details of the configured manager's own team (requires credentials)",
            json!({"type": "object", "properties": {}}),
        ),
        Tool::new(
            "get_team",
            "Any manager's team for a gameweek (requires credentials)",
            json!({
                "type": "object",
                "properties": {
                    "team_id": {"type": "integer", "description": "FPL entry id"},
                    "gameweek": {
                        "type": "integer",
                        "description": "Gameweek to read; defaults to the current one"
                    }
                },
                "required": ["team_id"]
            }),
        ),
        Tool::new(
            "get_manager_info",
            "Public profile of a manager entry",
            json!({
                "type": "object",
                "properties": {
                    "team_id": {
                        "type": "integer",
                        "description": "FPL entry id; defaults to FPL_TEAM_ID"
                    }
                }
            }),
        ),
        Tool::new(
            "get_team_history",
            "Recent gameweek history for a manager entry (requires credentials)",
            json!({
                "type": "object",
                "properties": {
                    "team_id": {
                        "type": "integer",
                        "description": "FPL entry id; defaults to FPL_TEAM_ID"
                    },
                    "num_gameweeks": {
                        "type": "integer",
                        "description": "Most recent gameweeks to include",
                        "default": 5
                    }
                }
            }),
        ),
        Tool::new(
            "get_league_standings",
            "Top of a classic league table",
            json!({
                "type": "object",
                "properties": {
                    "league_id": {"type": "integer", "description": "Classic league id"}
                },
                "required": ["league_id"]
            }),
        ),
        Tool::new(
            "check_fpl_authentication",
            "Verify that the configured FPL credentials work",
            json!({"type": "object", "properties": {}}),
        ),
    ]
}
