//! Greeting lab server
//!
//! Serves a single static welcome message on port 3111.

use backend_labs::{api, config::ServerConfig, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::greeting();
    let app = server::with_middleware(api::greeting::router());

    server::run(&config.addr(), app).await
}
