//! Service binary: logging, configuration, seeded stores, HTTP server

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mealdrop::config::AppConfig;
use mealdrop::seed;
use mealdrop::server::{self, AppState};
use mealdrop::storage::InMemoryRepository;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("MEALDROP_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default(),
    };

    let state = if config.seed {
        AppState {
            dishes: Arc::new(InMemoryRepository::with_records(seed::dishes())),
            orders: Arc::new(InMemoryRepository::with_records(seed::orders())),
        }
    } else {
        AppState {
            dishes: Arc::new(InMemoryRepository::new()),
            orders: Arc::new(InMemoryRepository::new()),
        }
    };

    server::serve(&config.bind_addr(), state).await
}
