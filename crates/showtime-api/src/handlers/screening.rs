//! Public screening endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};

use showtime_core::types::response::{PaginatedResponse, Response};
use showtime_database::repositories::ScreeningFilter;
use showtime_entity::screening::ScreeningListing;

use crate::dto::request::ScreeningQuery;
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/screenings
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ScreeningQuery>,
    Query(page): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<ScreeningListing>>> {
    let filter = ScreeningFilter {
        movie_id: query.movie_id,
        language_id: query.language_id,
        date: query.date,
        theater_id: query.theater_id,
        screen_id: query.screen_id,
    };
    let screenings = state
        .screenings
        .list(&filter, &page.into_page_request())
        .await?;
    Ok(Json(PaginatedResponse::ok("Screenings retrieved", screenings)))
}

/// GET /api/v1/screenings/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<ScreeningListing>>> {
    let screening = state.screenings.get(id).await?;
    Ok(Json(Response::ok("Screening retrieved", screening)))
}
