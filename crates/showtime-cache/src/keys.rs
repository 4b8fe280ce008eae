//! Cache key builders for Showtime cache entries.

/// Namespace of session records.
const SESSION: &str = "session";

/// Pattern matching every session record.
pub const SESSION_PATTERN: &str = "session:*";

/// Cache key of the session identified by `token`.
pub fn session(token: &str) -> String {
    format!("{SESSION}:{token}")
}
