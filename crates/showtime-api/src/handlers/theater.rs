//! Public theater endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};

use showtime_core::types::response::{PaginatedResponse, Response};
use showtime_database::repositories::TheaterFilter;
use showtime_entity::venue::{Theater, TheaterWithScreens};

use crate::dto::request::TheaterQuery;
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/theaters
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TheaterQuery>,
    Query(page): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<Theater>>> {
    let filter = TheaterFilter {
        city: query.city,
        state: query.state,
        is_active: query.is_active,
    };
    let theaters = state
        .theaters
        .list(&filter, &page.into_page_request())
        .await?;
    Ok(Json(PaginatedResponse::ok("Theaters retrieved", theaters)))
}

/// GET /api/v1/theaters/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<TheaterWithScreens>>> {
    let theater = state.theaters.get(id).await?;
    Ok(Json(Response::ok("Theater retrieved", theater)))
}
