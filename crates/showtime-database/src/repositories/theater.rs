//! Theater repository implementation.

use sqlx::PgPool;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::venue::{NewTheater, Theater};

use crate::error::{db, is_foreign_key_violation};

/// Optional filters for theater listings.
#[derive(Debug, Clone, Default)]
pub struct TheaterFilter {
    /// Case-insensitive exact city match.
    pub city: Option<String>,
    /// Case-insensitive exact state match.
    pub state: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct TheaterRepository {
    pool: PgPool,
}

impl TheaterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        filter: &TheaterFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Theater>> {
        let predicate = "($1::TEXT IS NULL OR LOWER(city) = LOWER($1)) \
             AND ($2::TEXT IS NULL OR LOWER(state) = LOWER($2)) \
             AND ($3::BOOL IS NULL OR is_active = $3)";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM theaters WHERE {predicate}"))
                .bind(&filter.city)
                .bind(&filter.state)
                .bind(filter.is_active)
                .fetch_one(&self.pool)
                .await
                .map_err(db("Failed to count theaters"))?;

        let theaters = sqlx::query_as::<_, Theater>(&format!(
            "SELECT * FROM theaters WHERE {predicate} ORDER BY name ASC, id ASC LIMIT $4 OFFSET $5"
        ))
        .bind(&filter.city)
        .bind(&filter.state)
        .bind(filter.is_active)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list theaters"))?;

        Ok(PageResponse::new(theaters, page, total as u64))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Theater>> {
        sqlx::query_as::<_, Theater>("SELECT * FROM theaters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find theater"))
    }

    pub async fn create(&self, data: &NewTheater) -> AppResult<Theater> {
        sqlx::query_as::<_, Theater>(
            "INSERT INTO theaters (name, address, city, state, is_active) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(db("Failed to create theater"))
    }

    /// Write every mutable column of `theater`.
    pub async fn update(&self, theater: &Theater) -> AppResult<Option<Theater>> {
        sqlx::query_as::<_, Theater>(
            "UPDATE theaters SET name = $2, address = $3, city = $4, state = $5, \
                    is_active = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(theater.id)
        .bind(&theater.name)
        .bind(&theater.address)
        .bind(&theater.city)
        .bind(&theater.state)
        .bind(theater.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to update theater"))
    }

    /// Flip `is_active` atomically.
    pub async fn toggle_active(&self, id: i64) -> AppResult<Option<Theater>> {
        sqlx::query_as::<_, Theater>(
            "UPDATE theaters SET is_active = NOT is_active, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to toggle theater"))
    }

    pub async fn has_screens(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM screens WHERE theater_id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to check theater screens"))
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM theaters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::conflict("Theater has screens")
                } else {
                    db("Failed to delete theater")(e)
                }
            })?;
        Ok(result.rows_affected() > 0)
    }
}
