//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::{API_DESCRIPTION, ApiDoc, DOCS_PATH, OPENAPI_PATH, REDOC_PATH};
use crate::api::handlers;
use crate::api::middleware::logging_middleware;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. CORS (debug mode only)
/// 2. Response compression
/// 3. Set request ID - keeps an incoming X-Request-ID or assigns a UUID
/// 4. Propagate request ID - echoes it on the response
/// 5. Logging middleware - logs requests with request IDs
///
/// # Routes
/// - `/` - API information
/// - `/health` - Health check
/// - `/docs` - Swagger UI
/// - `/redoc` - ReDoc
/// - `/openapi.json` - OpenAPI document
pub fn create_router(state: AppState) -> Router {
    let (router, mut openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::root::root_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    openapi.info.title = state.settings.app_name.clone();
    openapi.info.version = state.settings.app_version.clone();
    openapi.info.description = Some(API_DESCRIPTION.to_string());

    let router = router
        .merge(Redoc::with_url(REDOC_PATH, openapi.clone()))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi))
        .fallback(handlers::fallback::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CompressionLayer::new());

    let router = if state.settings.debug {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}
