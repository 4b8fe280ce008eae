//! Session manager: the only writer of session records in the session cache.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use showtime_cache::CacheManager;
use showtime_cache::keys;
use showtime_core::config::SessionConfig;
use showtime_core::traits::cache::CacheProvider;
use showtime_entity::session::Session;
use showtime_entity::user::ADMIN_ROLE;

use super::error::SessionError;
use super::token;

/// Where a login came from.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: String,
    pub user_agent: String,
}

/// Creates, validates, extends, and revokes sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    cache: CacheManager,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(cache: CacheManager, config: SessionConfig) -> Self {
        Self { cache, config }
    }

    /// TTL class of a role: `admin` sessions live longer than everyone else's.
    pub fn ttl_for_role(&self, role_name: &str) -> Duration {
        if role_name == ADMIN_ROLE {
            self.config.admin_ttl()
        } else {
            self.config.user_ttl()
        }
    }

    /// Issue a new token and persist its session record for `ttl`.
    pub async fn create(
        &self,
        user_id: i64,
        role_id: i64,
        client: &ClientInfo,
        ttl: Duration,
    ) -> Result<Session, SessionError> {
        let now = Utc::now();
        let session = Session {
            session_id: token::generate(self.config.token_bytes),
            user_id,
            role_id,
            created_at: now,
            expires_at: now + to_delta(ttl),
            ip_address: client.ip_address.clone(),
            user_agent: client.user_agent.clone(),
        };

        self.cache
            .set_json(&keys::session(&session.session_id), &session, ttl)
            .await?;

        info!(user_id, role_id, expires_at = %session.expires_at, "Session created");
        Ok(session)
    }

    /// Look up the session behind `token`. Expired records are deleted on sight.
    pub async fn validate(&self, token: &str) -> Result<Session, SessionError> {
        let key = keys::session(token);
        let session: Session = self
            .cache
            .get_json(&key)
            .await?
            .ok_or(SessionError::NotFound)?;

        if session.is_expired_at(Utc::now()) {
            if let Err(e) = self.cache.delete(&key).await {
                debug!(error = %e, "Failed to delete expired session");
            }
            return Err(SessionError::Expired);
        }

        Ok(session)
    }

    /// Push `expires_at` to `now + ttl` and re-persist. An expiry already
    /// further out is kept, so extension never shortens a session.
    pub async fn extend(&self, session: &Session, ttl: Duration) -> Result<Session, SessionError> {
        let now = Utc::now();
        let mut extended = session.clone();
        extended.expires_at = later(session.expires_at, now + to_delta(ttl));

        let remaining = (extended.expires_at - now).to_std().unwrap_or(ttl);
        self.cache
            .set_json(&keys::session(&extended.session_id), &extended, remaining)
            .await?;

        Ok(extended)
    }

    /// Delete the session behind `token`. Revoking an absent session is not an error.
    pub async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        self.cache.delete(&keys::session(token)).await?;
        debug!("Session revoked");
        Ok(())
    }

    /// Delete every session owned by `user_id`. Returns the number removed.
    pub async fn revoke_user(&self, user_id: i64) -> Result<u64, SessionError> {
        let mut revoked = 0u64;

        for key in self.cache.keys(keys::SESSION_PATTERN).await? {
            let owner = match self.cache.get_json::<Session>(&key).await {
                Ok(Some(session)) => session.user_id,
                Ok(None) => continue,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable session record");
                    continue;
                }
            };
            if owner == user_id {
                self.cache.delete(&key).await?;
                revoked += 1;
            }
        }

        info!(user_id, revoked, "Revoked user sessions");
        Ok(revoked)
    }
}

fn to_delta(ttl: Duration) -> TimeDelta {
    TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX)
}

fn later(a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use showtime_core::error::AppError;
    use showtime_core::result::AppResult;

    use super::*;

    fn manager() -> SessionManager {
        SessionManager::new(CacheManager::in_memory(), SessionConfig::default())
    }

    fn client() -> ClientInfo {
        ClientInfo {
            ip_address: "10.0.0.1".to_string(),
            user_agent: "test-agent".to_string(),
        }
    }

    #[derive(Debug)]
    struct DownCache;

    #[async_trait]
    impl CacheProvider for DownCache {
        async fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::cache("connection refused"))
        }
        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AppResult<()> {
            Err(AppError::cache("connection refused"))
        }
        async fn delete(&self, _key: &str) -> AppResult<()> {
            Err(AppError::cache("connection refused"))
        }
        async fn keys(&self, _pattern: &str) -> AppResult<Vec<String>> {
            Err(AppError::cache("connection refused"))
        }
        async fn health_check(&self) -> AppResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let sessions = manager();
        let err = sessions.validate("never-issued").await.unwrap_err();
        assert!(matches!(err, SessionError::NotFound));
    }

    #[tokio::test]
    async fn created_session_validates() {
        let sessions = manager();
        let created = sessions
            .create(7, 2, &client(), Duration::from_secs(3600))
            .await
            .unwrap();

        let found = sessions.validate(&created.session_id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.ip_address, "10.0.0.1");
        assert!(found.expires_at > found.created_at);
    }

    #[tokio::test]
    async fn expired_record_fails_and_is_deleted() {
        let cache = CacheManager::in_memory();
        let sessions = SessionManager::new(cache.clone(), SessionConfig::default());
        let now = Utc::now();
        let stale = Session {
            session_id: "stale".to_string(),
            user_id: 1,
            role_id: 1,
            created_at: now - TimeDelta::hours(2),
            expires_at: now - TimeDelta::seconds(1),
            ip_address: String::new(),
            user_agent: String::new(),
        };
        cache
            .set_json(&keys::session("stale"), &stale, Duration::from_secs(60))
            .await
            .unwrap();

        assert!(matches!(
            sessions.validate("stale").await.unwrap_err(),
            SessionError::Expired
        ));
        // The stale key is gone, so a retry reports it as absent.
        assert!(cache.get(&keys::session("stale")).await.unwrap().is_none());
        assert!(matches!(
            sessions.validate("stale").await.unwrap_err(),
            SessionError::NotFound
        ));
    }

    #[tokio::test]
    async fn extend_never_moves_expiry_backwards() {
        let sessions = manager();
        let created = sessions
            .create(1, 1, &client(), Duration::from_secs(24 * 3600))
            .await
            .unwrap();

        let shorter = sessions
            .extend(&created, Duration::from_secs(8 * 3600))
            .await
            .unwrap();
        assert_eq!(shorter.expires_at, created.expires_at);

        let mut previous = shorter.expires_at;
        for _ in 0..3 {
            let current = sessions.validate(&created.session_id).await.unwrap();
            let longer = sessions
                .extend(&current, Duration::from_secs(48 * 3600))
                .await
                .unwrap();
            assert!(longer.expires_at >= previous);
            previous = longer.expires_at;
        }
        assert_eq!(
            sessions.validate(&created.session_id).await.unwrap().expires_at,
            previous
        );
    }

    #[tokio::test]
    async fn revoke_is_idempotent() {
        let sessions = manager();
        let created = sessions
            .create(1, 1, &client(), Duration::from_secs(60))
            .await
            .unwrap();

        sessions.revoke(&created.session_id).await.unwrap();
        sessions.revoke(&created.session_id).await.unwrap();
        assert!(matches!(
            sessions.validate(&created.session_id).await.unwrap_err(),
            SessionError::NotFound
        ));
    }

    #[tokio::test]
    async fn revoke_user_only_touches_that_user() {
        let sessions = manager();
        let ttl = Duration::from_secs(60);
        let a1 = sessions.create(1, 2, &client(), ttl).await.unwrap();
        let a2 = sessions.create(1, 2, &client(), ttl).await.unwrap();
        let b = sessions.create(2, 2, &client(), ttl).await.unwrap();

        assert_eq!(sessions.revoke_user(1).await.unwrap(), 2);
        assert!(sessions.validate(&a1.session_id).await.is_err());
        assert!(sessions.validate(&a2.session_id).await.is_err());
        assert!(sessions.validate(&b.session_id).await.is_ok());
    }

    #[test]
    fn ttl_class_follows_role_name() {
        let sessions = manager();
        assert_eq!(sessions.ttl_for_role("admin"), Duration::from_secs(24 * 3600));
        assert_eq!(sessions.ttl_for_role("moderator"), Duration::from_secs(8 * 3600));
        assert_eq!(sessions.ttl_for_role("Admin"), Duration::from_secs(8 * 3600));
    }

    #[tokio::test]
    async fn cache_failures_surface_as_store_unavailable() {
        let sessions = SessionManager::new(
            CacheManager::from_provider(Arc::new(DownCache)),
            SessionConfig::default(),
        );
        assert!(matches!(
            sessions.validate("any").await.unwrap_err(),
            SessionError::StoreUnavailable(_)
        ));
        assert!(matches!(
            sessions
                .create(1, 1, &client(), Duration::from_secs(60))
                .await
                .unwrap_err(),
            SessionError::StoreUnavailable(_)
        ));
    }
}
