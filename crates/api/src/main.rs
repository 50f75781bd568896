//! Attrition Scoring Service - Main Entry Point

use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Attrition Scoring Service v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    info!("Scoring artifact path: {}", settings.artifact_path.display());

    run_server(settings).await?;

    Ok(())
}
