//! Movie and movie-language write handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use showtime_core::types::response::Response;
use showtime_entity::catalog::{MovieDetails, MovieLanguage, MovieLanguageDetail};

use crate::dto::request::{
    AddMovieLanguageRequest, CreateMovieRequest, UpdateMovieLanguageRequest, UpdateMovieRequest,
};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/admin/v1/movies
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateMovieRequest>,
) -> ApiResult<(StatusCode, Json<Response<MovieDetails>>)> {
    let movie = state.movies.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Movie created", movie))))
}

/// PUT /api/admin/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateMovieRequest>,
) -> ApiResult<Json<Response<MovieDetails>>> {
    let movie = state.movies.update(id, req.into()).await?;
    Ok(Json(Response::ok("Movie updated", movie)))
}

/// DELETE /api/admin/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.movies.delete(id).await?;
    Ok(Json(Response::message("Movie deleted")))
}

/// GET /api/admin/v1/movies/{id}/languages
pub async fn list_languages(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<Vec<MovieLanguageDetail>>>> {
    let entries = state.movies.languages(id).await?;
    Ok(Json(Response::ok("Movie languages retrieved", entries)))
}

/// POST /api/admin/v1/movies/{id}/languages
pub async fn add_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<AddMovieLanguageRequest>,
) -> ApiResult<(StatusCode, Json<Response<MovieLanguage>>)> {
    let entry = state.movies.add_language(&req.into_new(id)).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Movie language added", entry))))
}

/// PUT /api/admin/v1/movies/{id}/languages/{entry_id}
pub async fn update_language(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(i64, i64)>,
    ValidatedJson(req): ValidatedJson<UpdateMovieLanguageRequest>,
) -> ApiResult<Json<Response<MovieLanguage>>> {
    let entry = state
        .movies
        .update_language(id, entry_id, &req.into())
        .await?;
    Ok(Json(Response::ok("Movie language updated", entry)))
}

/// DELETE /api/admin/v1/movies/{id}/languages/{entry_id}
pub async fn remove_language(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(i64, i64)>,
) -> ApiResult<Json<Response<()>>> {
    state.movies.remove_language(id, entry_id).await?;
    Ok(Json(Response::message("Movie language removed")))
}
