//! Screen handlers. Screens and seats are only visible to admins.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use showtime_core::types::response::{PaginatedResponse, Response};
use showtime_entity::venue::{Screen, ScreenWithSeats};

use crate::dto::request::{CreateScreenRequest, ScreenQuery, UpdateScreenRequest};
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/v1/screens
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ScreenQuery>,
    Query(page): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<Screen>>> {
    let screens = state
        .screens
        .list(query.theater_id, &page.into_page_request())
        .await?;
    Ok(Json(PaginatedResponse::ok("Screens retrieved", screens)))
}

/// POST /api/admin/v1/screens
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateScreenRequest>,
) -> ApiResult<(StatusCode, Json<Response<ScreenWithSeats>>)> {
    let screen = state.screens.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Screen created", screen))))
}

/// GET /api/admin/v1/screens/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<ScreenWithSeats>>> {
    let screen = state.screens.get(id).await?;
    Ok(Json(Response::ok("Screen retrieved", screen)))
}

/// PUT /api/admin/v1/screens/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateScreenRequest>,
) -> ApiResult<Json<Response<ScreenWithSeats>>> {
    let screen = state.screens.update(id, req.into()).await?;
    Ok(Json(Response::ok("Screen updated", screen)))
}

/// DELETE /api/admin/v1/screens/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.screens.delete(id).await?;
    Ok(Json(Response::message("Screen deleted")))
}
