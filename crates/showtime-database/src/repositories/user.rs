//! User repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::user::{NewUser, Role, User, UserWithRole};

use crate::error::{db, unique_violation};
use crate::store::{UserFilter, UserStore};

const EMAIL_INDEX: &str = "users_email_active_key";

const COLUMNS: &str = "u.id, u.email, u.password_hash, u.name, u.role_id, u.is_active, \
                       u.created_at, u.updated_at, u.deleted_at";

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

/// Row shape of `users JOIN roles`.
#[derive(FromRow)]
struct UserRoleRow {
    #[sqlx(flatten)]
    user: User,
    role_name: String,
    role_created_at: DateTime<Utc>,
    role_updated_at: DateTime<Utc>,
}

impl From<UserRoleRow> for UserWithRole {
    fn from(row: UserRoleRow) -> Self {
        let role = Role {
            id: row.user.role_id,
            name: row.role_name,
            created_at: row.role_created_at,
            updated_at: row.role_updated_at,
        };
        Self {
            user: row.user,
            role,
        }
    }
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_write_error(e: sqlx::Error, email: &str) -> AppError {
        if unique_violation(&e) == Some(EMAIL_INDEX) {
            return AppError::conflict(format!("Email '{email}' is already registered"));
        }
        db("Failed to write user")(e)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users u WHERE u.id = $1 AND u.deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to find user by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users u \
             WHERE LOWER(u.email) = LOWER($1) AND u.deleted_at IS NULL"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to find user by email"))
    }

    async fn find_with_role(&self, id: i64) -> AppResult<Option<UserWithRole>> {
        let row = sqlx::query_as::<_, UserRoleRow>(&format!(
            "SELECT {COLUMNS}, r.name AS role_name, r.created_at AS role_created_at, \
                    r.updated_at AS role_updated_at \
             FROM users u JOIN roles r ON r.id = u.role_id \
             WHERE u.id = $1 AND u.deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to load user with role"))?;

        Ok(row.map(UserWithRole::from))
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserWithRole>> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));
        let predicate = "u.deleted_at IS NULL \
             AND ($1::TEXT IS NULL OR u.name ILIKE $1 OR u.email ILIKE $1) \
             AND ($2::BIGINT IS NULL OR u.role_id = $2) \
             AND ($3::BOOL IS NULL OR u.is_active = $3)";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM users u WHERE {predicate}"))
                .bind(&pattern)
                .bind(filter.role_id)
                .bind(filter.is_active)
                .fetch_one(&self.pool)
                .await
                .map_err(db("Failed to count users"))?;

        let rows = sqlx::query_as::<_, UserRoleRow>(&format!(
            "SELECT {COLUMNS}, r.name AS role_name, r.created_at AS role_created_at, \
                    r.updated_at AS role_updated_at \
             FROM users u JOIN roles r ON r.id = u.role_id \
             WHERE {predicate} \
             ORDER BY u.created_at DESC, u.id DESC LIMIT $4 OFFSET $5"
        ))
        .bind(&pattern)
        .bind(filter.role_id)
        .bind(filter.is_active)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list users"))?;

        let users = rows.into_iter().map(UserWithRole::from).collect();
        Ok(PageResponse::new(users, page, total as u64))
    }

    async fn list_by_role(
        &self,
        role_id: i64,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        let total = self.count_by_role(role_id).await?;

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users u \
             WHERE u.role_id = $1 AND u.deleted_at IS NULL \
             ORDER BY u.created_at DESC, u.id DESC LIMIT $2 OFFSET $3"
        ))
        .bind(role_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list users by role"))?;

        Ok(PageResponse::new(users, page, total as u64))
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, name, role_id, is_active) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, email, password_hash, name, role_id, is_active, \
                       created_at, updated_at, deleted_at",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.name)
        .bind(data.role_id)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &data.email))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = $2, password_hash = $3, name = $4, role_id = $5, \
                    is_active = $6, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, email, password_hash, name, role_id, is_active, \
                       created_at, updated_at, deleted_at",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.role_id)
        .bind(user.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &user.email))?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db("Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_role(&self, role_id: i64) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE role_id = $1 AND deleted_at IS NULL",
        )
        .bind(role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db("Failed to count users by role"))
    }
}
