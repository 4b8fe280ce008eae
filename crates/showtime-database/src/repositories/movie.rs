//! Movie repository: movies, their genre/cast links, and language entries.

use sqlx::{PgPool, Postgres, Transaction};

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::catalog::{
    CastEntry, CastMember, Genre, Movie, MovieDetails, MovieLanguage, MovieLanguageDetail,
    NewMovie, NewMovieLanguage,
};

use crate::error::{db, unique_violation};

const MOVIE_LANGUAGE_KEY: &str = "movie_languages_movie_language_key";

const COLUMNS: &str = "id, original_title, duration_minutes, release_date, rating, description, \
                       poster_url, is_active, created_at, updated_at, deleted_at";

/// Optional filters for movie listings.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-insensitive substring of the original title.
    pub search: Option<String>,
    pub genre_id: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        filter: &MovieFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Movie>> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));
        let predicate = "deleted_at IS NULL \
             AND ($1::TEXT IS NULL OR original_title ILIKE $1) \
             AND ($2::BIGINT IS NULL OR EXISTS \
                  (SELECT 1 FROM movie_genres mg WHERE mg.movie_id = movies.id AND mg.genre_id = $2)) \
             AND ($3::BOOL IS NULL OR is_active = $3)";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM movies WHERE {predicate}"))
                .bind(&pattern)
                .bind(filter.genre_id)
                .bind(filter.is_active)
                .fetch_one(&self.pool)
                .await
                .map_err(db("Failed to count movies"))?;

        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {COLUMNS} FROM movies WHERE {predicate} \
             ORDER BY created_at DESC, id DESC LIMIT $4 OFFSET $5"
        ))
        .bind(&pattern)
        .bind(filter.genre_id)
        .bind(filter.is_active)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list movies"))?;

        Ok(PageResponse::new(movies, page, total as u64))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>(&format!(
            "SELECT {COLUMNS} FROM movies WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to find movie"))
    }

    /// The movie with genres, cast, and language entries.
    pub async fn find_details(&self, id: i64) -> AppResult<Option<MovieDetails>> {
        let Some(movie) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let genres = sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.name FROM genres g JOIN movie_genres mg ON mg.genre_id = g.id \
             WHERE mg.movie_id = $1 ORDER BY g.name",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to load movie genres"))?;

        let cast = sqlx::query_as::<_, CastMember>(
            "SELECT p.id AS person_id, p.name, mc.role, mc.character_name \
             FROM movie_cast mc JOIN persons p ON p.id = mc.person_id \
             WHERE mc.movie_id = $1 ORDER BY mc.role, p.name",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to load movie cast"))?;

        let languages = self.list_languages(id).await?;

        Ok(Some(MovieDetails::new(movie, genres, cast, languages)))
    }

    /// Number of the given person ids that exist.
    pub async fn count_existing_persons(&self, ids: &[i64]) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM persons WHERE id = ANY($1)")
            .bind(ids)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to check persons"))
    }

    /// Insert the movie and its genre/cast links in one transaction.
    pub async fn create(
        &self,
        data: &NewMovie,
        genre_ids: &[i64],
        cast: &[CastEntry],
    ) -> AppResult<Movie> {
        let mut tx = self.pool.begin().await.map_err(db("Failed to begin transaction"))?;

        let movie = sqlx::query_as::<_, Movie>(&format!(
            "INSERT INTO movies (original_title, duration_minutes, release_date, rating, \
                                 description, poster_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
        ))
        .bind(&data.original_title)
        .bind(data.duration_minutes)
        .bind(data.release_date)
        .bind(data.rating)
        .bind(&data.description)
        .bind(&data.poster_url)
        .bind(data.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(db("Failed to insert movie"))?;

        Self::replace_genres(&mut tx, movie.id, genre_ids).await?;
        Self::replace_cast(&mut tx, movie.id, cast).await?;

        tx.commit().await.map_err(db("Failed to commit movie"))?;
        Ok(movie)
    }

    /// Write every mutable column of `movie`; replace links that are `Some`.
    pub async fn update(
        &self,
        movie: &Movie,
        genre_ids: Option<&[i64]>,
        cast: Option<&[CastEntry]>,
    ) -> AppResult<Option<Movie>> {
        let mut tx = self.pool.begin().await.map_err(db("Failed to begin transaction"))?;

        let updated = sqlx::query_as::<_, Movie>(&format!(
            "UPDATE movies SET original_title = $2, duration_minutes = $3, release_date = $4, \
                    rating = $5, description = $6, poster_url = $7, is_active = $8, \
                    updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {COLUMNS}"
        ))
        .bind(movie.id)
        .bind(&movie.original_title)
        .bind(movie.duration_minutes)
        .bind(movie.release_date)
        .bind(movie.rating)
        .bind(&movie.description)
        .bind(&movie.poster_url)
        .bind(movie.is_active)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db("Failed to update movie"))?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        if let Some(ids) = genre_ids {
            Self::replace_genres(&mut tx, updated.id, ids).await?;
        }
        if let Some(entries) = cast {
            Self::replace_cast(&mut tx, updated.id, entries).await?;
        }

        tx.commit().await.map_err(db("Failed to commit movie update"))?;
        Ok(Some(updated))
    }

    pub async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE movies SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db("Failed to delete movie"))?;
        Ok(result.rows_affected() > 0)
    }

    // ── Language entries ─────────────────────────────────────────────

    pub async fn list_languages(&self, movie_id: i64) -> AppResult<Vec<MovieLanguageDetail>> {
        sqlx::query_as::<_, MovieLanguageDetail>(
            "SELECT ml.*, l.code AS language_code, l.name AS language_name \
             FROM movie_languages ml JOIN languages l ON l.id = ml.language_id \
             WHERE ml.movie_id = $1 ORDER BY l.name",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list movie languages"))
    }

    pub async fn find_language_entry(
        &self,
        movie_id: i64,
        entry_id: i64,
    ) -> AppResult<Option<MovieLanguage>> {
        sqlx::query_as::<_, MovieLanguage>(
            "SELECT * FROM movie_languages WHERE id = $1 AND movie_id = $2",
        )
        .bind(entry_id)
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to find movie language"))
    }

    /// Add a language entry. A duplicate (movie, language) pair yields `Conflict`.
    pub async fn add_language(&self, data: &NewMovieLanguage) -> AppResult<MovieLanguage> {
        sqlx::query_as::<_, MovieLanguage>(
            "INSERT INTO movie_languages (movie_id, language_id, title, description, has_audio, \
                                          has_subtitles, audio_format, subtitle_format) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.movie_id)
        .bind(data.language_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.has_audio)
        .bind(data.has_subtitles)
        .bind(&data.audio_format)
        .bind(&data.subtitle_format)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if unique_violation(&e) == Some(MOVIE_LANGUAGE_KEY) {
                AppError::conflict("Language already added to this movie")
            } else {
                db("Failed to add movie language")(e)
            }
        })
    }

    pub async fn update_language(&self, entry: &MovieLanguage) -> AppResult<Option<MovieLanguage>> {
        sqlx::query_as::<_, MovieLanguage>(
            "UPDATE movie_languages SET title = $3, description = $4, has_audio = $5, \
                    has_subtitles = $6, audio_format = $7, subtitle_format = $8, \
                    updated_at = NOW() \
             WHERE id = $1 AND movie_id = $2 RETURNING *",
        )
        .bind(entry.id)
        .bind(entry.movie_id)
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(entry.has_audio)
        .bind(entry.has_subtitles)
        .bind(&entry.audio_format)
        .bind(&entry.subtitle_format)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to update movie language"))
    }

    pub async fn remove_language(&self, movie_id: i64, entry_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM movie_languages WHERE id = $1 AND movie_id = $2")
            .bind(entry_id)
            .bind(movie_id)
            .execute(&self.pool)
            .await
            .map_err(db("Failed to remove movie language"))?;
        Ok(result.rows_affected() > 0)
    }

    // ── Internal helpers ─────────────────────────────────────────────

    async fn replace_genres(
        tx: &mut Transaction<'_, Postgres>,
        movie_id: i64,
        genre_ids: &[i64],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut **tx)
            .await
            .map_err(db("Failed to clear movie genres"))?;

        for &genre_id in genre_ids {
            sqlx::query(
                "INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(movie_id)
            .bind(genre_id)
            .execute(&mut **tx)
            .await
            .map_err(db("Failed to link movie genre"))?;
        }
        Ok(())
    }

    async fn replace_cast(
        tx: &mut Transaction<'_, Postgres>,
        movie_id: i64,
        cast: &[CastEntry],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM movie_cast WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut **tx)
            .await
            .map_err(db("Failed to clear movie cast"))?;

        for entry in cast {
            sqlx::query(
                "INSERT INTO movie_cast (movie_id, person_id, role, character_name) \
                 VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
            )
            .bind(movie_id)
            .bind(entry.person_id)
            .bind(&entry.role)
            .bind(&entry.character_name)
            .execute(&mut **tx)
            .await
            .map_err(db("Failed to link movie cast"))?;
        }
        Ok(())
    }
}
