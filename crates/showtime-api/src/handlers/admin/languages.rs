//! Language write handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use showtime_core::types::response::Response;
use showtime_entity::catalog::Language;

use crate::dto::request::{CreateLanguageRequest, UpdateLanguageRequest};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/admin/v1/languages
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateLanguageRequest>,
) -> ApiResult<(StatusCode, Json<Response<Language>>)> {
    let language = state.languages.create(&req.into()).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Language created", language))))
}

/// PUT /api/admin/v1/languages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateLanguageRequest>,
) -> ApiResult<Json<Response<Language>>> {
    let language = state.languages.update(id, &req.into()).await?;
    Ok(Json(Response::ok("Language updated", language)))
}

/// DELETE /api/admin/v1/languages/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.languages.delete(id).await?;
    Ok(Json(Response::message("Language deleted")))
}
