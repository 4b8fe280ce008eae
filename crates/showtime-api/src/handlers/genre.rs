//! Public genre listing.

use axum::Json;
use axum::extract::{Query, State};

use showtime_core::types::response::Response;
use showtime_entity::catalog::Genre;

use crate::dto::request::SearchQuery;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/v1/genres
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Response<Vec<Genre>>>> {
    let genres = state.genres.list(query.search.as_deref()).await?;
    Ok(Json(Response::ok("Genres retrieved", genres)))
}
