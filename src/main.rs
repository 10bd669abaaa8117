//! FitTracker
//!
//! An MCP server for a daily food and exercise diary.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fittracker::build_info;
use fittracker::config::Config;
use fittracker::db::{Database, SqliteEntryStore};
use fittracker::mcp::FitTrackerService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so it does not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fittracker=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    info!(build = %build_info::banner(), "Starting FitTracker");

    let config = Config::from_env()?;
    let store = SqliteEntryStore::new(Database::open(&config.database_path)?);
    let service = FitTrackerService::new(config.database_path.clone(), store, config.goals);

    info!("Starting MCP server on stdio");
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
