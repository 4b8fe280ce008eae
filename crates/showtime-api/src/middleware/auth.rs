//! Session authentication middleware.
//!
//! Each guarded route group runs the access gate once and stores the
//! resulting [`Identity`] in the request extensions, where handlers read it
//! with `Extension<Identity>`.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use showtime_auth::{AccessLevel, Identity};

use crate::error::ApiResult;
use crate::state::AppState;

/// Admit only sessions whose user holds the `admin` role.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    admit(&state, request, next, AccessLevel::Admin).await
}

/// Admit any session whose user is active.
pub async fn require_active(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    admit(&state, request, next, AccessLevel::Active).await
}

async fn admit(
    state: &AppState,
    mut request: Request,
    next: Next,
    level: AccessLevel,
) -> ApiResult<Response> {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let identity: Identity = state.gate.admit(authorization, level).await?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
