//! Genre write handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use showtime_core::types::response::Response;
use showtime_entity::catalog::Genre;

use crate::dto::request::GenreRequest;
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/admin/v1/genres
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<GenreRequest>,
) -> ApiResult<(StatusCode, Json<Response<Genre>>)> {
    let genre = state.genres.create(&req.name).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Genre created", genre))))
}

/// PUT /api/admin/v1/genres/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<GenreRequest>,
) -> ApiResult<Json<Response<Genre>>> {
    let genre = state.genres.update(id, &req.name).await?;
    Ok(Json(Response::ok("Genre updated", genre)))
}

/// DELETE /api/admin/v1/genres/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.genres.delete(id).await?;
    Ok(Json(Response::message("Genre deleted")))
}
