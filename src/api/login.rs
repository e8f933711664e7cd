//! Login/month server routes
//!
//! Four routes over an append-only login log and a static month table, plus
//! a catch-all greeting for any other single path segment. The router
//! resolves static segments ahead of captures, so `/loginDetails` and
//! `/fetchMonths/:num` are never shadowed by `/:name`.

use crate::state::{month_name, LoginLog, LoginRecord};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Build the login/month server's router around a shared login log
pub fn router(state: Arc<RwLock<LoginLog>>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/loginDetails", get(login_details))
        .route("/login/:name", post(login))
        .route("/fetchMonths/:num", get(fetch_month))
        .route("/:name", get(greet))
        .with_state(state)
}

/// GET / - static welcome message
async fn index() -> &'static str {
    "Welcome to the express server"
}

/// GET /loginDetails - every recorded login, oldest first
async fn login_details(
    State(state): State<Arc<RwLock<LoginLog>>>,
) -> Json<Vec<LoginRecord>> {
    let log = state.read().await;
    Json(log.records().to_vec())
}

/// POST /login/:name - record a login for `name`
async fn login(
    State(state): State<Arc<RwLock<LoginLog>>>,
    Path(name): Path<String>,
) -> String {
    let mut log = state.write().await;
    log.record(name.clone());
    format!("{}, You are logged in!", name)
}

/// GET /:name - greet the caller by name
async fn greet(Path(name): Path<String>) -> String {
    format!("Hello {}", name)
}

/// GET /fetchMonths/:num - name of month `num`, for `num` in 1-12
///
/// Anything that does not parse as an in-range month number gets the same
/// rejection text, including non-numeric input.
async fn fetch_month(Path(num): Path<String>) -> String {
    num.parse::<u32>()
        .ok()
        .and_then(month_name)
        .map(str::to_owned)
        .unwrap_or_else(|| {
            "Invalid month number. Please provide a number between 1 and 12.".to_string()
        })
}
