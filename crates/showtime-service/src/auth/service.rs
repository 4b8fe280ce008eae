//! Credential verification and session issuance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use showtime_auth::password::PasswordHasher;
use showtime_auth::session::{ClientInfo, SessionManager};
use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_database::UserStore;
use showtime_entity::user::UserWithRole;

/// A freshly issued session.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserWithRole,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: SessionManager,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, sessions: SessionManager, hasher: PasswordHasher) -> Self {
        Self {
            users,
            sessions,
            hasher,
        }
    }

    /// Admin-only login. Every failure, including a valid non-admin
    /// account, reports the same message.
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
        client: &ClientInfo,
    ) -> AppResult<LoginOutcome> {
        let rejected = || AppError::authentication("Invalid admin credentials");

        let user = self.verified(email, password).await?.ok_or_else(rejected)?;
        if !user.user.is_active || !user.role.is_admin() {
            warn!(user_id = user.user.id, "Admin login refused");
            return Err(rejected());
        }

        self.issue(user, client).await
    }

    /// Login for any active account.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        client: &ClientInfo,
    ) -> AppResult<LoginOutcome> {
        let user = self
            .verified(email, password)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        if !user.user.is_active {
            return Err(AppError::authorization("Account is inactive"));
        }

        self.issue(user, client).await
    }

    /// Revoke the presenting session. Repeating it is harmless.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.sessions.revoke(token).await?;
        Ok(())
    }

    pub async fn profile(&self, user_id: i64) -> AppResult<UserWithRole> {
        self.users
            .find_with_role(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn verified(&self, email: &str, password: &str) -> AppResult<Option<UserWithRole>> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };
        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Ok(None);
        }
        self.users.find_with_role(user.id).await
    }

    async fn issue(&self, user: UserWithRole, client: &ClientInfo) -> AppResult<LoginOutcome> {
        let ttl = self.sessions.ttl_for_role(&user.role.name);
        let session = self
            .sessions
            .create(user.user.id, user.role.id, client, ttl)
            .await?;

        info!(user_id = user.user.id, role = %user.role.name, "Login successful");
        Ok(LoginOutcome {
            token: session.session_id,
            expires_at: session.expires_at,
            user,
        })
    }
}
