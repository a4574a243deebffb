mod config; // scenario settings loaded through the `config` crate
mod scenario; // builds the grid and runs every algorithm against it

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let settings = config::load_config(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path))?;

    info!("Playfield scenario runner started.");
    let report = scenario::run(&settings)?;
    info!(
        path_found = report.path.is_success(),
        path_length = report.path.path_length,
        nodes_explored = report.path.nodes_explored,
        filled = report.filled,
        cleared = report.cleared,
        overlaps = report.overlaps.len(),
        rows = report.grid.len(),
        "Scenario finished"
    );
    Ok(())
}
