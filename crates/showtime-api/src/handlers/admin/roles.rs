//! Role management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use showtime_core::types::response::{PaginatedResponse, Response};
use showtime_entity::user::{Role, User};

use crate::dto::request::{RoleRequest, SearchQuery};
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/v1/roles
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
    Query(page): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<Role>>> {
    let roles = state
        .roles
        .list(query.search.as_deref(), &page.into_page_request())
        .await?;
    Ok(Json(PaginatedResponse::ok("Roles retrieved", roles)))
}

/// POST /api/admin/v1/roles
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> ApiResult<(StatusCode, Json<Response<Role>>)> {
    let role = state.roles.create(&req.name).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("Role created", role))))
}

/// GET /api/admin/v1/roles/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<Role>>> {
    let role = state.roles.get(id).await?;
    Ok(Json(Response::ok("Role retrieved", role)))
}

/// PUT /api/admin/v1/roles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> ApiResult<Json<Response<Role>>> {
    let role = state.roles.update(id, &req.name).await?;
    Ok(Json(Response::ok("Role updated", role)))
}

/// DELETE /api/admin/v1/roles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.roles.delete(id).await?;
    Ok(Json(Response::message("Role deleted")))
}

/// GET /api/admin/v1/roles/{id}/users
pub async fn users(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(page): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<User>>> {
    let users = state.roles.users(id, &page.into_page_request()).await?;
    Ok(Json(PaginatedResponse::ok("Role users retrieved", users)))
}
