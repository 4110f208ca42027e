use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{bad_request, internal_error, AppState, ErrorResponse};
use crate::storage::NewRoute;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRouteRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRouteResponse {
    pub id: i32,
}

/// Create a new route
#[utoipa::path(
    post,
    path = "/routes",
    request_body = CreateRouteRequest,
    responses(
        (status = 201, description = "Route created", body = CreateRouteResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn create_route(
    State(state): State<AppState>,
    payload: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRouteResponse>), (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(bad_request)?;

    let id = state
        .store
        .create_route(NewRoute { name: req.name })
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(CreateRouteResponse { id })))
}
