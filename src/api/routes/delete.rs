use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::{bad_request, internal_error, AppState, ErrorResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteRouteResponse {}

/// Delete a route
#[utoipa::path(
    delete,
    path = "/routes/{id}",
    params(
        ("id" = i32, Path, description = "Route id")
    ),
    responses(
        (status = 200, description = "Route deleted", body = DeleteRouteResponse),
        (status = 400, description = "Invalid route id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn delete_route(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteRouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Path(id) = id.map_err(bad_request)?;

    state
        .store
        .delete_route(id)
        .await
        .map_err(internal_error)?;

    Ok(Json(DeleteRouteResponse {}))
}
