pub mod error;
pub mod routes;

pub use error::{bad_request, internal_error, not_found, ErrorResponse};

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use crate::storage::RouteStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RouteStore>,
}

#[derive(OpenApi)]
#[openapi(tags(
    (name = "health", description = "Service liveness"),
    (name = "routes", description = "Route management")
))]
pub struct ApiDoc;

/// Build the application router with all endpoints and the Swagger UI.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(healthz))
        .routes(routes!(routes::list::list_routes, routes::create::create_route))
        .routes(routes!(
            routes::list::get_route,
            routes::update::update_route,
            routes::delete::delete_route
        ))
        .with_state(state)
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = "health"
)]
pub async fn healthz() -> &'static str {
    "OK"
}
