use anyhow::Context;
use employee_search::error::Result;
use employee_search::server::EmployeeServer;
use employee_search::{EmployeeSearch, RosterFile, SearchConfig};
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;

/// Path to the JSON roster exported by the directory sync.
const ROSTER_ENV: &str = "EMPLOYEE_ROSTER";
/// Optional path to a TOML search configuration.
const CONFIG_ENV: &str = "EMPLOYEE_SEARCH_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    employee_search::tracing::init();

    let roster = std::env::var_os(ROSTER_ENV)
        .map(PathBuf::from)
        .with_context(|| format!("{} must point at a JSON employee roster", ROSTER_ENV))?;
    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = SearchConfig::load_or_default(config_path.as_deref())
        .context("Failed to load search configuration")?;

    tracing::info!(
        roster = %roster.display(),
        default_limit = config.default_limit,
        "Starting employee-search MCP server"
    );

    let search = EmployeeSearch::with_config(RosterFile::new(roster), config);
    let service = EmployeeServer::new(search)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error serving MCP server: {:?}", e);
        })?;

    service.waiting().await?;

    Ok(())
}
