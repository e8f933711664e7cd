//! Person directory lab server
//!
//! Serves the route-creation and error-handling exercise over a seeded
//! in-memory person list on port 5000.

use backend_labs::{api, config::ServerConfig, server, state::PeopleDirectory};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::directory();

    // Initialize application state
    let directory = Arc::new(RwLock::new(PeopleDirectory::seeded()));
    let app = server::with_middleware(api::directory::router(directory));

    server::run(&config.addr(), app).await
}
