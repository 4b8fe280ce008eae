//! sqlx error mapping shared by the repositories.

use showtime_core::error::{AppError, ErrorKind};

/// Wrap a sqlx error with context. An exhausted pool is `ServiceUnavailable`;
/// everything else is `Database`.
pub(crate) fn db(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        let kind = match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::Database,
        };
        AppError::with_source(kind, context, e)
    }
}

/// Name of the violated unique constraint or index, if `e` is one.
pub(crate) fn unique_violation(e: &sqlx::Error) -> Option<&str> {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => db_err.constraint(),
        _ => None,
    }
}

/// Whether `e` is a foreign-key violation.
pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
