//! Convenience result type alias for Showtime.

use crate::error::AppError;

/// A specialized `Result` type for Showtime operations.
pub type AppResult<T> = Result<T, AppError>;
