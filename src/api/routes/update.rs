use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{bad_request, internal_error, AppState, ErrorResponse};
use crate::storage::Route;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRouteRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateRouteResponse {}

/// Replace the name of a route
#[utoipa::path(
    put,
    path = "/routes/{id}",
    params(
        ("id" = i32, Path, description = "Route id")
    ),
    request_body = UpdateRouteRequest,
    responses(
        (status = 200, description = "Route updated", body = UpdateRouteResponse),
        (status = 400, description = "Invalid route id or malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn update_route(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateRouteRequest>, JsonRejection>,
) -> Result<Json<UpdateRouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Path(id) = id.map_err(bad_request)?;
    let Json(req) = payload.map_err(bad_request)?;

    state
        .store
        .update_route(&Route { id, name: req.name })
        .await
        .map_err(internal_error)?;

    Ok(Json(UpdateRouteResponse {}))
}
