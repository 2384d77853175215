//! Root endpoint handler.

use axum::{extract::State, response::Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ROOT_TAG;
use crate::api::dto::RootResponse;
use crate::state::AppState;

/// Creates the root route.
pub fn root_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(root))
}

/// GET / - API information
///
/// Greets with the configured application name and points to the docs.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information", body = RootResponse)
    ),
    tag = ROOT_TAG
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::from(state.settings.as_ref()))
}
