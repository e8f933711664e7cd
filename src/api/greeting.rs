//! Greeting server routes
//!
//! One static route; no state, no inputs, no side effects.

use axum::{routing::get, Router};

/// Build the greeting server's router
pub fn router() -> Router {
    Router::new().route("/", get(index))
}

/// GET / - static welcome message
async fn index() -> &'static str {
    "Welcome to my own Express server!"
}
