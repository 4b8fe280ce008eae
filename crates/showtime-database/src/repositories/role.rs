//! Role repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::user::Role;

use crate::error::{db, is_foreign_key_violation, unique_violation};
use crate::store::RoleStore;

const NAME_KEY: &str = "roles_name_key";

#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_write_error(e: sqlx::Error, name: &str) -> AppError {
        if unique_violation(&e) == Some(NAME_KEY) {
            return AppError::conflict(format!("Role '{name}' already exists"));
        }
        db("Failed to write role")(e)
    }
}

#[async_trait]
impl RoleStore for RoleRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find role by id"))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find role by name"))
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Role>> {
        let pattern = search.map(|s| format!("%{s}%"));

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM roles WHERE ($1::TEXT IS NULL OR name ILIKE $1)")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(db("Failed to count roles"))?;

        let roles = sqlx::query_as::<_, Role>(
            "SELECT * FROM roles WHERE ($1::TEXT IS NULL OR name ILIKE $1) \
             ORDER BY id ASC LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list roles"))?;

        Ok(PageResponse::new(roles, page, total as u64))
    }

    async fn create(&self, name: &str) -> AppResult<Role> {
        sqlx::query_as::<_, Role>("INSERT INTO roles (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, name))
    }

    async fn update(&self, id: i64, name: &str) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "UPDATE roles SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, name))?
        .ok_or_else(|| AppError::not_found("Role not found"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Soft-deleted users still reference the role.
                if is_foreign_key_violation(&e) {
                    AppError::conflict("Role is still referenced by user records")
                } else {
                    db("Failed to delete role")(e)
                }
            })?;

        Ok(result.rows_affected() > 0)
    }
}
