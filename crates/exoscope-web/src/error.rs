//! Error surface for the JSON API.
//!
//! A failed catalog fetch maps to 502 so callers can tell an upstream
//! outage from a bug; everything else is 500. Page handlers render their
//! own inline notice instead and never go through this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use exoscope_common::ExoscopeError;
use serde_json::json;
use tracing::warn;

#[derive(Debug)]
pub struct ApiError(pub ExoscopeError);

impl From<ExoscopeError> for ApiError {
    fn from(err: ExoscopeError) -> Self {
        ApiError(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError(ExoscopeError::Serialization(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ExoscopeError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(error = %self.0, "api request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
