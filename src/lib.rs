//! # FPL MCP Server
//!
//! A Model Context Protocol server for Fantasy Premier League data,
//! speaking line-delimited JSON-RPC 2.0 over stdio.
//!
//! ## Features
//!
//! - **Cached public API access**: every FPL endpoint read goes through
//!   an in-memory TTL cache, so repeated tool calls within the hour cost
//!   no network I/O
//! - **Authenticated endpoints**: team details, picks and history use the
//!   FPL login flow, with sessions reused for two hours and one automatic
//!   re-login when a cached session is rejected
//! - **Gameweek classification**: blank and double gameweek detection
//!   over the fixture list
//! - **Player analysis**: search, multi-criteria filtering, side-by-side
//!   comparison and fixture-difficulty ratings
//!
//! ## Environment Configuration
//!
//! - `FPL_EMAIL` / `FPL_PASSWORD`: login credentials for the
//!   authenticated tools
//! - `FPL_TEAM_ID`: the manager entry the `get_my_team_details` and
//!   `check_fpl_authentication` tools operate on
//!
//! All three are optional; without them the public tools keep working.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_mcp::tools::{self, ToolContext};
//! use fpl_mcp::Config;
//!
//! # async fn example() -> fpl_mcp::Result<()> {
//! let ctx = ToolContext::new(Config::from_env())?;
//! let status = tools::dispatch(&ctx, "get_gameweek_status", serde_json::json!({})).await?;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod fpl;
pub mod mcp;
pub mod tools;

pub use config::Config;
pub use error::{FplError, Result};
pub use fpl::position::Position;
