use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fpl_mcp::mcp::server::McpServer;
use fpl_mcp::tools::{self, ToolContext};
use fpl_mcp::Config;

/// Fantasy Premier League MCP server
#[derive(Debug, Parser)]
#[clap(name = "fpl-mcp", version)]
struct FplMcp {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve MCP over stdio (the default)
    Serve,
    /// Print the tool manifest as JSON and exit
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the JSON-RPC stream, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("fpl_mcp=info".parse()?))
        .init();

    let app = FplMcp::parse();
    match app.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = Config::from_env();
            info!(
                auth_configured = config.credentials().is_some(),
                team_id_configured = config.team_id.is_some(),
                "starting FPL MCP server"
            );
            let ctx = ToolContext::new(config)?;
            McpServer::new(ctx).run().await?;
        }
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&tools::tool_manifest())?);
        }
    }

    Ok(())
}
