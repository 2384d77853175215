//! Catch-all for unmatched routes.

use axum::http::Uri;

use crate::error::AppError;

/// Answers every unmatched request with a JSON 404.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}
