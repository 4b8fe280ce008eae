//! Admin user management handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use showtime_auth::Identity;
use showtime_core::types::response::{PaginatedResponse, Response};
use showtime_database::UserFilter;
use showtime_entity::user::UserWithRole;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest, UserQuery};
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/v1/users
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
    Query(page): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<UserWithRole>>> {
    let filter = UserFilter {
        search: query.search,
        role_id: query.role_id,
        is_active: query.is_active,
    };
    let users = state
        .users
        .list(&filter, &page.into_page_request())
        .await?;
    Ok(Json(PaginatedResponse::ok("Users retrieved", users)))
}

/// POST /api/admin/v1/users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<Response<UserWithRole>>)> {
    let user = state.users.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(Response::ok("User created", user))))
}

/// GET /api/admin/v1/users/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<UserWithRole>>> {
    let user = state.users.get(id).await?;
    Ok(Json(Response::ok("User retrieved", user)))
}

/// PUT /api/admin/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<Response<UserWithRole>>> {
    let user = state.users.update(id, req.into()).await?;
    Ok(Json(Response::ok("User updated", user)))
}

/// DELETE /api/admin/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Response<()>>> {
    state.users.delete(identity.user_id, id).await?;
    Ok(Json(Response::message("User deleted")))
}
