//! Language repository implementation.

use sqlx::PgPool;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_entity::catalog::{Language, NewLanguage};

use crate::error::{db, is_foreign_key_violation, unique_violation};

const CODE_KEY: &str = "languages_code_key";

#[derive(Debug, Clone)]
pub struct LanguageRepository {
    pool: PgPool,
}

impl LanguageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_write_error(e: sqlx::Error, code: &str) -> AppError {
        if unique_violation(&e) == Some(CODE_KEY) {
            return AppError::conflict(format!("Language code '{code}' already exists"));
        }
        db("Failed to write language")(e)
    }

    /// Languages ordered by name; `search` matches name or code.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Language>> {
        let pattern = search.map(|s| format!("%{s}%"));
        sqlx::query_as::<_, Language>(
            "SELECT * FROM languages \
             WHERE ($1::TEXT IS NULL OR name ILIKE $1 OR code ILIKE $1) ORDER BY name",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list languages"))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Language>> {
        sqlx::query_as::<_, Language>("SELECT * FROM languages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find language"))
    }

    pub async fn create(&self, data: &NewLanguage) -> AppResult<Language> {
        sqlx::query_as::<_, Language>(
            "INSERT INTO languages (code, name, native_name, is_active) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.native_name)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &data.code))
    }

    /// Write every mutable column of `language`.
    pub async fn update(&self, language: &Language) -> AppResult<Option<Language>> {
        sqlx::query_as::<_, Language>(
            "UPDATE languages SET code = $2, name = $3, native_name = $4, is_active = $5, \
                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(language.id)
        .bind(&language.code)
        .bind(&language.name)
        .bind(&language.native_name)
        .bind(language.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &language.code))
    }

    /// Whether a movie-language entry or a screening references the language.
    pub async fn is_in_use(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM movie_languages WHERE language_id = $1) \
                 OR EXISTS (SELECT 1 FROM screenings \
                            WHERE language_id = $1 OR subtitle_language_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(db("Failed to check language usage"))
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::conflict("Language is in use")
                } else {
                    db("Failed to delete language")(e)
                }
            })?;
        Ok(result.rows_affected() > 0)
    }
}
