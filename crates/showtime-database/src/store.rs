//! Credential store seam.
//!
//! The session layer, the access gate, and the user/role services talk to
//! users and roles only through these traits. PostgreSQL implementations
//! live in [`crate::repositories`]; an in-memory one is available behind
//! the `memory` feature.

use async_trait::async_trait;

use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::user::{NewUser, Role, User, UserWithRole};

/// Optional filters for user listings.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring of name or email.
    pub search: Option<String>,
    pub role_id: Option<i64>,
    pub is_active: Option<bool>,
}

/// Persistence of user accounts. Soft-deleted users are invisible to
/// every method.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Case-insensitive email lookup.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// The user together with its role.
    async fn find_with_role(&self, id: i64) -> AppResult<Option<UserWithRole>>;

    /// Filtered listing, newest first.
    async fn list(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserWithRole>>;

    async fn list_by_role(&self, role_id: i64, page: &PageRequest)
    -> AppResult<PageResponse<User>>;

    /// Insert a user. A duplicate email yields a `Conflict` error.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// Write every mutable column of `user`. A duplicate email yields `Conflict`.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Set `deleted_at`. Returns `false` if the user was absent.
    async fn soft_delete(&self, id: i64) -> AppResult<bool>;

    async fn count_by_role(&self, role_id: i64) -> AppResult<i64>;
}

/// Persistence of roles.
#[async_trait]
pub trait RoleStore: Send + Sync + std::fmt::Debug + 'static {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Role>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Listing ordered by id, optionally filtered by a name substring.
    async fn list(&self, search: Option<&str>, page: &PageRequest)
    -> AppResult<PageResponse<Role>>;

    /// Insert a role. A duplicate name yields a `Conflict` error.
    async fn create(&self, name: &str) -> AppResult<Role>;

    /// Rename a role. A duplicate name yields a `Conflict` error.
    async fn update(&self, id: i64, name: &str) -> AppResult<Role>;

    /// Returns `false` if the role was absent.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
