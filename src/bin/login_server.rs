//! Login/month lab server
//!
//! Records login events in an in-memory log and serves month-number lookups
//! on port 3333.

use backend_labs::{api, config::ServerConfig, server, state::LoginLog};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::login();

    // Initialize application state
    let login_log = Arc::new(RwLock::new(LoginLog::new()));
    let app = server::with_middleware(api::login::router(login_log));

    server::run(&config.addr(), app).await
}
