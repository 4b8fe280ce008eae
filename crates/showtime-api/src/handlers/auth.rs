//! Session handlers: login, logout, and the caller's own profile.

use axum::extract::State;
use axum::{Extension, Json};

use showtime_auth::Identity;
use showtime_core::types::response::Response;
use showtime_entity::user::UserWithRole;
use showtime_service::LoginOutcome;

use crate::dto::request::LoginRequest;
use crate::dto::response::AdminLoginResponse;
use crate::error::ApiResult;
use crate::extractors::{ClientMeta, ValidatedJson};
use crate::state::AppState;

/// POST /api/admin/v1/auth/login
pub async fn admin_login(
    State(state): State<AppState>,
    ClientMeta(client): ClientMeta,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<Response<AdminLoginResponse>>> {
    let outcome = state
        .auth
        .admin_login(&req.email, &req.password, &client)
        .await?;
    Ok(Json(Response::ok("Admin login successful", outcome.into())))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ClientMeta(client): ClientMeta,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<Response<LoginOutcome>>> {
    let outcome = state.auth.login(&req.email, &req.password, &client).await?;
    Ok(Json(Response::ok("Login successful", outcome)))
}

/// POST /api/admin/v1/logout, POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Response<()>>> {
    state.auth.logout(&identity.session_id).await?;
    Ok(Json(Response::message("Logout successful")))
}

/// GET /api/admin/v1/profile, GET /api/v1/me
pub async fn me(Extension(identity): Extension<Identity>) -> Json<Response<UserWithRole>> {
    let profile = UserWithRole {
        user: identity.user,
        role: identity.role,
    };
    Json(Response::ok("Profile retrieved", profile))
}
