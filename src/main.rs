//! wage-tracker HTTP server.
//!
//! Loads the YAML configuration, seeds an in-memory store and serves the API.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use wage_tracker::api::{AppState, create_router};
use wage_tracker::config::{SeedLoader, TrackerConfig};
use wage_tracker::store::InMemoryStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CONFIG_ENV: &str = "WAGE_TRACKER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/tracker.yaml";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config_path = std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = TrackerConfig::load(&config_path)?;

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("wage_tracker={}", config.log_level).into()),
        )
        .init();

    info!(path = %config_path.display(), "Loaded configuration");

    let store = InMemoryStore::new();
    match &config.seed_dir {
        Some(dir) => {
            let report = SeedLoader::load(dir)?.apply(&store)?;
            info!(
                members = report.members,
                attendance = report.attendance,
                payments = report.payments,
                "Seeded store"
            );
        }
        None => warn!("No seed_dir configured, starting with an empty store"),
    }

    let bind_address = config.bind_address.clone();
    let app = create_router(AppState::new(Arc::new(store), config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("wage-tracker listening on {bind_address}");
    axum::serve(listener, app).await?;
    Ok(())
}
