//! Session record stored in the session cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-side session binding an opaque token to a user and role.
///
/// Serialized as JSON under `session:<token>`. The record is valid iff the
/// current time is strictly before `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The opaque bearer token.
    pub session_id: String,
    pub user_id: i64,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: String,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let session = Session {
            session_id: "tok".to_string(),
            user_id: 1,
            role_id: 1,
            created_at: now - Duration::hours(1),
            expires_at: now,
            ip_address: "127.0.0.1".to_string(),
            user_agent: "curl".to_string(),
        };
        assert!(session.is_expired_at(now));
        assert!(!session.is_expired_at(now - Duration::seconds(1)));
    }
}
