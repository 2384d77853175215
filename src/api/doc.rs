use utoipa::OpenApi;

pub const ROOT_TAG: &str = "Root";
pub const HEALTH_TAG: &str = "Health";

/// Path serving the interactive Swagger UI
pub const DOCS_PATH: &str = "/docs";

/// Path serving the ReDoc reference page
pub const REDOC_PATH: &str = "/redoc";

/// Path serving the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";

pub const API_DESCRIPTION: &str = "A REST API for an e-commerce platform";

/// Static part of the OpenAPI document.
///
/// Title, version and description are filled in from the loaded settings
/// when the router is built.
#[derive(OpenApi)]
#[openapi(
    info(title = "E-Commerce API"),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = ROOT_TAG, description = "API information"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
