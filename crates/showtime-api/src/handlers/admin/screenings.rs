//! Screening write handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use showtime_core::types::response::Response;
use showtime_entity::screening::Screening;

use crate::dto::request::{CreateScreeningRequest, UpdateScreeningRequest};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/admin/v1/screenings
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateScreeningRequest>,
) -> ApiResult<(StatusCode, Json<Response<Screening>>)> {
    let screening = state.screenings.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Screening created", screening))))
}

/// PUT /api/admin/v1/screenings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateScreeningRequest>,
) -> ApiResult<Json<Response<Screening>>> {
    let screening = state.screenings.update(id, &req.into()).await?;
    Ok(Json(Response::ok("Screening updated", screening)))
}

/// DELETE /api/admin/v1/screenings/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.screenings.delete(id).await?;
    Ok(Json(Response::message("Screening deleted")))
}
