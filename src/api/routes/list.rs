use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::RouteBody;
use crate::api::{bad_request, internal_error, not_found, AppState, ErrorResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteListResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteBody>,
}

/// List all routes
#[utoipa::path(
    get,
    path = "/routes",
    responses(
        (status = 200, description = "List of routes", body = RouteListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<RouteListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let routes = state.store.list_routes().await.map_err(internal_error)?;

    Ok(Json(RouteListResponse {
        routes: routes.into_iter().map(RouteBody::from).collect(),
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteResponse {
    pub route: RouteBody,
}

/// Get a single route
#[utoipa::path(
    get,
    path = "/routes/{id}",
    params(
        ("id" = i32, Path, description = "Route id")
    ),
    responses(
        (status = 200, description = "The requested route", body = RouteResponse),
        (status = 400, description = "Invalid route id", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn get_route(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Path(id) = id.map_err(bad_request)?;

    let route = state.store.get_route(id).await.map_err(internal_error)?;
    let route = route.ok_or_else(|| not_found("Route"))?;

    Ok(Json(RouteResponse {
        route: route.into(),
    }))
}
