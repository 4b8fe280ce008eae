//! User CRUD with role checks, password hashing, and session revocation.

use std::sync::Arc;

use tracing::{info, warn};

use showtime_auth::password::PasswordHasher;
use showtime_auth::session::SessionManager;
use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::traits::Patch;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_database::{RoleStore, UserFilter, UserStore};
use showtime_entity::user::{NewUser, UserPatch, UserWithRole};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role_id: i64,
    pub is_active: bool,
}

/// Fields left `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role_id: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    sessions: SessionManager,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        sessions: SessionManager,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            roles,
            sessions,
            hasher,
        }
    }

    pub async fn list(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserWithRole>> {
        self.users.list(filter, page).await
    }

    pub async fn get(&self, id: i64) -> AppResult<UserWithRole> {
        self.users
            .find_with_role(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    pub async fn create(&self, req: CreateUser) -> AppResult<UserWithRole> {
        self.require_role(req.role_id).await?;

        let user = self
            .users
            .create(&NewUser {
                email: req.email,
                password_hash: self.hasher.hash_password(&req.password)?,
                name: req.name,
                role_id: req.role_id,
                is_active: req.is_active,
            })
            .await?;

        info!(user_id = user.id, role_id = user.role_id, "User created");
        self.get(user.id).await
    }

    pub async fn update(&self, id: i64, req: UpdateUser) -> AppResult<UserWithRole> {
        let current = self.get(id).await?;

        if let Some(role_id) = req.role_id {
            self.require_role(role_id).await?;
        }

        let patch = UserPatch {
            email: req.email,
            password_hash: req
                .password
                .as_deref()
                .map(|p| self.hasher.hash_password(p))
                .transpose()?,
            name: req.name,
            role_id: req.role_id,
            is_active: req.is_active,
        };
        if patch.is_empty() {
            return Ok(current);
        }

        let updated = self.users.update(&patch.merge(&current.user)).await?;
        info!(user_id = updated.id, "User updated");
        self.get(updated.id).await
    }

    /// Soft-delete `id` and revoke every session it owns.
    pub async fn delete(&self, actor_id: i64, id: i64) -> AppResult<()> {
        if actor_id == id {
            return Err(AppError::validation("You cannot delete your own account"));
        }
        if !self.users.soft_delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        match self.sessions.revoke_user(id).await {
            Ok(revoked) => info!(user_id = id, revoked, "User deleted"),
            // The access gate rejects sessions of deleted users anyway.
            Err(e) => warn!(user_id = id, error = %e, "User deleted but session revocation failed"),
        }
        Ok(())
    }

    async fn require_role(&self, role_id: i64) -> AppResult<()> {
        self.roles
            .find_by_id(role_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::validation("Role not found"))
    }
}
