//! Genre repository implementation.

use sqlx::PgPool;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_entity::catalog::Genre;

use crate::error::{db, unique_violation};

const NAME_KEY: &str = "genres_name_key";

#[derive(Debug, Clone)]
pub struct GenreRepository {
    pool: PgPool,
}

impl GenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_write_error(e: sqlx::Error, name: &str) -> AppError {
        if unique_violation(&e) == Some(NAME_KEY) {
            return AppError::conflict(format!("Genre '{name}' already exists"));
        }
        db("Failed to write genre")(e)
    }

    /// All genres ordered by name, optionally filtered by a name substring.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Genre>> {
        let pattern = search.map(|s| format!("%{s}%"));
        sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE ($1::TEXT IS NULL OR name ILIKE $1) ORDER BY name",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list genres"))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Genre>> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find genre"))
    }

    /// Number of the given ids that exist.
    pub async fn count_existing(&self, ids: &[i64]) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE id = ANY($1)")
            .bind(ids)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to check genres"))
    }

    pub async fn create(&self, name: &str) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, name))
    }

    pub async fn update(&self, id: i64, name: &str) -> AppResult<Option<Genre>> {
        sqlx::query_as::<_, Genre>("UPDATE genres SET name = $2 WHERE id = $1 RETURNING id, name")
            .bind(id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, name))
    }

    /// Whether any non-deleted movie is tagged with the genre.
    pub async fn is_in_use(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM movie_genres mg JOIN movies m ON m.id = mg.movie_id \
                            WHERE mg.genre_id = $1 AND m.deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(db("Failed to check genre usage"))
    }

    /// Delete the genre and its links to soft-deleted movies.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(db("Failed to begin transaction"))?;

        sqlx::query("DELETE FROM movie_genres WHERE genre_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db("Failed to unlink genre"))?;

        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db("Failed to delete genre"))?;

        tx.commit().await.map_err(db("Failed to commit genre delete"))?;
        Ok(result.rows_affected() > 0)
    }
}
