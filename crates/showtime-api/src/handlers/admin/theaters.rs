//! Theater write handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use showtime_core::types::response::Response;
use showtime_entity::venue::{Screen, Theater};

use crate::dto::request::{CreateTheaterRequest, UpdateTheaterRequest};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/admin/v1/theaters
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTheaterRequest>,
) -> ApiResult<(StatusCode, Json<Response<Theater>>)> {
    let theater = state.theaters.create(&req.into()).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Theater created", theater))))
}

/// PUT /api/admin/v1/theaters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateTheaterRequest>,
) -> ApiResult<Json<Response<Theater>>> {
    let theater = state.theaters.update(id, &req.into()).await?;
    Ok(Json(Response::ok("Theater updated", theater)))
}

/// PATCH /api/admin/v1/theaters/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<Theater>>> {
    let theater = state.theaters.toggle(id).await?;
    Ok(Json(Response::ok("Theater status toggled", theater)))
}

/// DELETE /api/admin/v1/theaters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.theaters.delete(id).await?;
    Ok(Json(Response::message("Theater deleted")))
}

/// GET /api/admin/v1/theaters/{id}/screens
pub async fn screens(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<Vec<Screen>>>> {
    let theater = state.theaters.get(id).await?;
    Ok(Json(Response::ok("Theater screens retrieved", theater.screens)))
}
