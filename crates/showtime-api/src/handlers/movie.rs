//! Public movie endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};

use showtime_core::types::response::{PaginatedResponse, Response};
use showtime_database::repositories::MovieFilter;
use showtime_entity::catalog::{Movie, MovieDetails};

use crate::dto::request::{LangQuery, MovieQuery};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
    Query(page): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<Movie>>> {
    let filter = MovieFilter {
        search: query.search,
        genre_id: query.genre_id,
        is_active: query.is_active,
    };
    let movies = state
        .movies
        .list(&filter, &page.into_page_request())
        .await?;
    Ok(Json(PaginatedResponse::ok("Movies retrieved", movies)))
}

/// GET /api/v1/movies/{id}?lang=
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Json<Response<MovieDetails>>> {
    let movie = state.movies.get(id, query.lang.as_deref()).await?;
    Ok(Json(Response::ok("Movie retrieved", movie)))
}
