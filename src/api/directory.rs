//! Person directory routes
//!
//! Route-creation and error-handling exercise: reads over a seeded person
//! list plus add/remove by id. Failure responses share the JSON
//! `{"message": ...}` shape produced by `ApiError`, and unmatched paths get
//! a JSON 404 from the router fallback.

use crate::error::ApiError;
use crate::state::{PeopleDirectory, Person};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Query parameters accepted by `/name_search`
#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    /// Name fragment to match against first names
    pub q: Option<String>,
}

/// Build the directory server's router around a shared person list
pub fn router(state: Arc<RwLock<PeopleDirectory>>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/exp", get(index_explicit))
        .route("/no_content", get(no_content))
        .route("/data", get(data_summary))
        .route("/count", get(count))
        .route("/name_search", get(name_search))
        .route("/person", post(add_person))
        .route("/person/:id", get(find_person).delete(delete_person))
        .fallback(api_not_found)
        .with_state(state)
}

/// GET / - plain text hello
async fn index() -> &'static str {
    "Hello World"
}

/// GET /exp - hello with an explicit status code
async fn index_explicit() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Hello World!")
}

/// GET /no_content - nothing to report
async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /data - how many records the directory currently holds
async fn data_summary(
    State(state): State<Arc<RwLock<PeopleDirectory>>>,
) -> Result<Json<Value>, ApiError> {
    let people = state.read().await;
    if people.is_empty() {
        return Err(ApiError::DataEmpty);
    }

    Ok(Json(json!({
        "message": format!("Data of length {} found", people.len()),
    })))
}

/// GET /count - record count under the `data count` key
async fn count(State(state): State<Arc<RwLock<PeopleDirectory>>>) -> Json<Value> {
    let people = state.read().await;
    Json(json!({ "data count": people.len() }))
}

/// GET /name_search?q=<fragment> - first person whose first name matches
///
/// `q` must be present, non-blank, and non-numeric; the match is a
/// case-insensitive substring test.
async fn name_search(
    State(state): State<Arc<RwLock<PeopleDirectory>>>,
    Query(params): Query<NameSearchParams>,
) -> Result<Json<Person>, ApiError> {
    let query = params.q.ok_or(ApiError::MissingQuery)?;
    if query.trim().is_empty() || query.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::InvalidQuery);
    }

    let people = state.read().await;
    people
        .search_first_name(&query)
        .cloned()
        .map(Json)
        .ok_or(ApiError::SearchNotFound)
}

/// GET /person/:id - look up one person by id
async fn find_person(
    State(state): State<Arc<RwLock<PeopleDirectory>>>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let people = state.read().await;
    people
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::PersonNotFound)
}

/// DELETE /person/:id - remove one person by id
async fn delete_person(
    State(state): State<Arc<RwLock<PeopleDirectory>>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut people = state.write().await;
    let removed = people.remove(&id).ok_or(ApiError::PersonNotFound)?;

    Ok(Json(json!({ "message": removed.id })))
}

/// POST /person - append a posted record
async fn add_person(
    State(state): State<Arc<RwLock<PeopleDirectory>>>,
    Json(person): Json<Person>,
) -> Json<Value> {
    let id = person.id.clone();
    let mut people = state.write().await;
    people.add(person);

    Json(json!({ "message": id }))
}

/// Fallback for any path no route claims
async fn api_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "API not found" })),
    )
}
