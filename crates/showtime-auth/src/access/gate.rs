//! The access gate.
//!
//! Runs Extract, Validate, Resolve, Authorize, Extend, Attach in order and
//! stops at the first failing step. Only Extend is allowed to fail without
//! rejecting the request.

use std::sync::Arc;

use tracing::{error, warn};

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_database::UserStore;
use showtime_entity::user::UserWithRole;

use crate::session::SessionManager;

use super::bearer::bearer_token;
use super::identity::{AccessLevel, Identity};

#[derive(Clone)]
pub struct AccessGate {
    sessions: SessionManager,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

impl AccessGate {
    pub fn new(sessions: SessionManager, users: Arc<dyn UserStore>) -> Self {
        Self { sessions, users }
    }

    /// Admit a request carrying `authorization` at `level`.
    pub async fn admit(&self, authorization: Option<&str>, level: AccessLevel) -> AppResult<Identity> {
        let token = bearer_token(authorization)?;
        let session = self.sessions.validate(token).await?;

        let resolved = match self.users.find_with_role(session.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(user_id = session.user_id, "Session owner no longer exists, revoking");
                if let Err(e) = self.sessions.revoke(token).await {
                    warn!(error = %e, "Failed to revoke orphaned session");
                }
                return Err(AppError::authentication("User not found"));
            }
            Err(e) => {
                error!(user_id = session.user_id, error = %e, "Failed to load session owner");
                return Err(AppError::authentication("User not found"));
            }
        };

        authorize(&resolved, level)?;

        let ttl = self.sessions.ttl_for_role(&resolved.role.name);
        if let Err(e) = self.sessions.extend(&session, ttl).await {
            warn!(user_id = session.user_id, error = %e, "Failed to extend session");
        }

        Ok(Identity {
            user_id: resolved.user.id,
            session_id: session.session_id,
            role: resolved.role,
            user: resolved.user,
        })
    }
}

fn authorize(resolved: &UserWithRole, level: AccessLevel) -> AppResult<()> {
    match level {
        AccessLevel::Admin if !resolved.role.is_admin() || !resolved.user.is_active => {
            Err(AppError::authorization("Admin access required"))
        }
        AccessLevel::Active if !resolved.user.is_active => {
            Err(AppError::authorization("Account is inactive"))
        }
        _ => Ok(()),
    }
}
