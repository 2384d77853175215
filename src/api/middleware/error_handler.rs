//! Error handler for converting AppError to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// Only unknown routes are client errors. Anything else is logged and
    /// answered with an opaque 500 so internal details never leave the
    /// process.
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::NotFound { path } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", &format!("No route for {}", path))
                    .with_details(json!({ "path": path })),
            ),
            other => {
                tracing::error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}
