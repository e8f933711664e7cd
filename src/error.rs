//! Error types for the person directory API
//!
//! Every failure the directory routes can report maps to a JSON body of the
//! shape `{"message": ...}` with a matching status code, via `IntoResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure responses of the person directory API
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The `q` query parameter was not supplied
    #[error("Query parameter 'q' is missing")]
    MissingQuery,

    /// The `q` query parameter was supplied but empty or numeric
    #[error("Invalid input parameter")]
    InvalidQuery,

    /// A name search matched nobody
    #[error("Person not Found")]
    SearchNotFound,

    /// No person exists with the requested id
    #[error("Person not found")]
    PersonNotFound,

    /// The directory holds no records
    #[error("Data is empty")]
    DataEmpty,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingQuery => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidQuery => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::SearchNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::PersonNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::DataEmpty => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
