//! Session manager errors.

use thiserror::Error;

use showtime_core::error::{AppError, ErrorKind};

#[derive(Debug, Error)]
pub enum SessionError {
    /// No record under the token: never issued, revoked, or evicted.
    #[error("Session not found")]
    NotFound,
    /// The record exists but `now >= expires_at`.
    #[error("Session expired")]
    Expired,
    /// The cache failed or held an unreadable record.
    #[error("Session store unavailable")]
    StoreUnavailable(#[source] AppError),
}

impl From<AppError> for SessionError {
    fn from(e: AppError) -> Self {
        Self::StoreUnavailable(e)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        Self::StoreUnavailable(AppError::from(e))
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound => AppError::authentication("Invalid or expired session"),
            SessionError::Expired => AppError::authentication("Session has expired"),
            SessionError::StoreUnavailable(source) => AppError::with_source(
                ErrorKind::ServiceUnavailable,
                "Session store unavailable",
                source,
            ),
        }
    }
}
