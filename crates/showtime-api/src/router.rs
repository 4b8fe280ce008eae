//! Route definitions for the Showtime HTTP API.
//!
//! Three route trees share one `AppState`:
//! - `/health`
//! - `/api/v1`: public catalog reads plus user login/logout
//! - `/api/admin/v1`: admin login, then everything else behind the admin gate

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
};

use crate::handlers;
use crate::handlers::admin;
use crate::middleware::auth::{require_active, require_admin};
use crate::state::AppState;

/// Build the router with every route group mounted.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api/v1", public_routes(&state))
        .nest("/api/admin/v1", admin_routes(&state))
        .with_state(state)
}

/// Catalog reads and the user session endpoints.
fn public_routes(state: &AppState) -> Router<AppState> {
    let session = Router::new()
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/me", get(handlers::auth::me))
        .route_layer(from_fn_with_state(state.clone(), require_active));

    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/genres", get(handlers::genre::list))
        .route("/languages", get(handlers::language::list))
        .route("/movies", get(handlers::movie::list))
        .route("/movies/{id}", get(handlers::movie::get))
        .route("/theaters", get(handlers::theater::list))
        .route("/theaters/{id}", get(handlers::theater::get))
        .route("/screenings", get(handlers::screening::list))
        .route("/screenings/{id}", get(handlers::screening::get))
        .merge(session)
}

/// Admin login is open; every other admin route passes the admin gate.
fn admin_routes(state: &AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .route("/profile", get(handlers::auth::me))
        .merge(identity_routes())
        .merge(catalog_routes())
        .merge(venue_routes())
        .merge(screening_routes())
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/auth/login", post(handlers::auth::admin_login))
        .merge(gated)
}

/// Roles and users
fn identity_routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(admin::roles::list).post(admin::roles::create))
        .route(
            "/roles/{id}",
            get(admin::roles::get)
                .put(admin::roles::update)
                .delete(admin::roles::delete),
        )
        .route("/roles/{id}/users", get(admin::roles::users))
        .route("/users", get(admin::users::list).post(admin::users::create))
        .route(
            "/users/{id}",
            get(admin::users::get)
                .put(admin::users::update)
                .delete(admin::users::delete),
        )
}

/// Genres, languages, movies, and per-movie language entries
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/genres",
            get(handlers::genre::list).post(admin::genres::create),
        )
        .route(
            "/genres/{id}",
            put(admin::genres::update).delete(admin::genres::delete),
        )
        .route(
            "/languages",
            get(handlers::language::list).post(admin::languages::create),
        )
        .route(
            "/languages/{id}",
            put(admin::languages::update).delete(admin::languages::delete),
        )
        .route(
            "/movies",
            get(handlers::movie::list).post(admin::movies::create),
        )
        .route(
            "/movies/{id}",
            get(handlers::movie::get)
                .put(admin::movies::update)
                .delete(admin::movies::delete),
        )
        .route(
            "/movies/{id}/languages",
            get(admin::movies::list_languages).post(admin::movies::add_language),
        )
        .route(
            "/movies/{id}/languages/{entry_id}",
            put(admin::movies::update_language)
                .delete(admin::movies::remove_language),
        )
}

/// Theaters and screens
fn venue_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/theaters",
            get(handlers::theater::list).post(admin::theaters::create),
        )
        .route(
            "/theaters/{id}",
            get(handlers::theater::get)
                .put(admin::theaters::update)
                .delete(admin::theaters::delete),
        )
        .route("/theaters/{id}/toggle", patch(admin::theaters::toggle))
        .route("/theaters/{id}/screens", get(admin::theaters::screens))
        .route("/screens", get(admin::screens::list).post(admin::screens::create))
        .route(
            "/screens/{id}",
            get(admin::screens::get)
                .put(admin::screens::update)
                .delete(admin::screens::delete),
        )
}

fn screening_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/screenings",
            get(handlers::screening::list).post(admin::screenings::create),
        )
        .route(
            "/screenings/{id}",
            get(handlers::screening::get)
                .put(admin::screenings::update)
                .delete(admin::screenings::delete),
        )
}
