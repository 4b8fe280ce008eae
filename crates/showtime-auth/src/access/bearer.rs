//! `Authorization: Bearer <token>` parsing.

use showtime_core::error::AppError;

/// Extract the token from an `Authorization` header value.
///
/// The scheme must be the literal `Bearer` followed by exactly one token
/// segment.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| AppError::authentication("Authorization header required"))?;

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AppError::authentication(
            "Authorization header must be 'Bearer <token>'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_token() {
        assert_eq!(bearer_token(Some("Bearer abc")).unwrap(), "abc");
    }

    #[test]
    fn rejects_malformed_headers() {
        for header in [
            None,
            Some(""),
            Some("Bearer"),
            Some("bearer abc"),
            Some("Basic abc"),
            Some("Bearer abc def"),
        ] {
            assert!(bearer_token(header).is_err(), "{header:?} should be rejected");
        }
    }
}
