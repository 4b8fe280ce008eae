//! # showtime-api
//!
//! HTTP API layer for Showtime built on Axum.
//!
//! Provides the public catalog endpoints, the admin CRUD surface, session
//! login/logout, the access-gate middleware, request extractors, DTOs,
//! and the mapping from [`showtime_core::AppError`] to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
