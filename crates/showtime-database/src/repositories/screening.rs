//! Screening repository.
//!
//! Writes that can move a screening in the schedule run inside a
//! transaction holding a row lock on the target screen, so two concurrent
//! writers for the same screen are serialized between the conflict check
//! and the insert.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::screening::{NewScreening, Screening, ScreeningListing};

use crate::error::db;

const COLUMNS: &str = "id, movie_id, screen_id, language_id, subtitle_language_id, show_date, \
                       show_time, end_time, base_price, premium_price, available_seats, \
                       audio_format, video_format, is_active, created_at, updated_at, deleted_at";

const LISTING_SELECT: &str = "SELECT s.id, s.movie_id, s.screen_id, s.language_id, \
        s.subtitle_language_id, s.show_date, s.show_time, s.end_time, s.base_price, \
        s.premium_price, s.available_seats, s.audio_format, s.video_format, s.is_active, \
        s.created_at, s.updated_at, s.deleted_at, \
        m.original_title AS movie_title, sc.name AS screen_name, \
        t.id AS theater_id, t.name AS theater_name, \
        l.code AS language_code, l.name AS language_name \
     FROM screenings s \
     JOIN movies m ON m.id = s.movie_id \
     JOIN screens sc ON sc.id = s.screen_id \
     JOIN theaters t ON t.id = sc.theater_id \
     JOIN languages l ON l.id = s.language_id";

/// Optional filters for the public screening listing.
#[derive(Debug, Clone, Default)]
pub struct ScreeningFilter {
    pub movie_id: Option<i64>,
    pub language_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub theater_id: Option<i64>,
    pub screen_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ScreeningRepository {
    pool: PgPool,
}

impl ScreeningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active screenings with seats left, ordered by date and time.
    pub async fn list(
        &self,
        filter: &ScreeningFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ScreeningListing>> {
        let predicate = "s.deleted_at IS NULL AND s.is_active AND s.available_seats > 0 \
             AND ($1::BIGINT IS NULL OR s.movie_id = $1) \
             AND ($2::BIGINT IS NULL OR s.language_id = $2) \
             AND ($3::DATE IS NULL OR s.show_date = $3) \
             AND ($4::BIGINT IS NULL OR sc.theater_id = $4) \
             AND ($5::BIGINT IS NULL OR s.screen_id = $5)";

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM screenings s JOIN screens sc ON sc.id = s.screen_id \
             WHERE {predicate}"
        ))
        .bind(filter.movie_id)
        .bind(filter.language_id)
        .bind(filter.date)
        .bind(filter.theater_id)
        .bind(filter.screen_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db("Failed to count screenings"))?;

        let items = sqlx::query_as::<_, ScreeningListing>(&format!(
            "{LISTING_SELECT} WHERE {predicate} \
             ORDER BY s.show_date, s.show_time, s.id LIMIT $6 OFFSET $7"
        ))
        .bind(filter.movie_id)
        .bind(filter.language_id)
        .bind(filter.date)
        .bind(filter.theater_id)
        .bind(filter.screen_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list screenings"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Screening>> {
        sqlx::query_as::<_, Screening>(&format!(
            "SELECT {COLUMNS} FROM screenings WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to find screening"))
    }

    pub async fn find_listing(&self, id: i64) -> AppResult<Option<ScreeningListing>> {
        sqlx::query_as::<_, ScreeningListing>(&format!(
            "{LISTING_SELECT} WHERE s.id = $1 AND s.deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to find screening"))
    }

    /// Insert a screening after `check` accepts the screen's existing
    /// schedule for that date. The check and the insert share a transaction
    /// that holds `FOR UPDATE` on the screen row.
    pub async fn create_checked<F>(&self, data: &NewScreening, check: F) -> AppResult<Screening>
    where
        F: FnOnce(&[Screening]) -> AppResult<()> + Send,
    {
        let mut tx = self.pool.begin().await.map_err(db("Failed to begin transaction"))?;

        Self::lock_screen(&mut tx, data.screen_id).await?;
        let existing = Self::schedule_for(&mut tx, data.screen_id, data.show_date, None).await?;
        check(&existing)?;

        let screening = sqlx::query_as::<_, Screening>(&format!(
            "INSERT INTO screenings (movie_id, screen_id, language_id, subtitle_language_id, \
                                     show_date, show_time, end_time, base_price, premium_price, \
                                     available_seats, audio_format, video_format) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING {COLUMNS}"
        ))
        .bind(data.movie_id)
        .bind(data.screen_id)
        .bind(data.language_id)
        .bind(data.subtitle_language_id)
        .bind(data.show_date)
        .bind(data.show_time)
        .bind(data.end_time)
        .bind(data.base_price)
        .bind(data.premium_price)
        .bind(data.available_seats)
        .bind(&data.audio_format)
        .bind(&data.video_format)
        .fetch_one(&mut *tx)
        .await
        .map_err(db("Failed to insert screening"))?;

        tx.commit().await.map_err(db("Failed to commit screening"))?;
        Ok(screening)
    }

    /// Write every mutable column of `screening`. When `check` is given it
    /// runs against the target screen's schedule (excluding this screening)
    /// under the same lock as [`Self::create_checked`].
    pub async fn update_checked<F>(
        &self,
        screening: &Screening,
        check: Option<F>,
    ) -> AppResult<Option<Screening>>
    where
        F: FnOnce(&[Screening]) -> AppResult<()> + Send,
    {
        let mut tx = self.pool.begin().await.map_err(db("Failed to begin transaction"))?;

        if let Some(check) = check {
            Self::lock_screen(&mut tx, screening.screen_id).await?;
            let existing = Self::schedule_for(
                &mut tx,
                screening.screen_id,
                screening.show_date,
                Some(screening.id),
            )
            .await?;
            check(&existing)?;
        }

        let updated = sqlx::query_as::<_, Screening>(&format!(
            "UPDATE screenings SET movie_id = $2, screen_id = $3, language_id = $4, \
                    subtitle_language_id = $5, show_date = $6, show_time = $7, end_time = $8, \
                    base_price = $9, premium_price = $10, available_seats = $11, \
                    audio_format = $12, video_format = $13, is_active = $14, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {COLUMNS}"
        ))
        .bind(screening.id)
        .bind(screening.movie_id)
        .bind(screening.screen_id)
        .bind(screening.language_id)
        .bind(screening.subtitle_language_id)
        .bind(screening.show_date)
        .bind(screening.show_time)
        .bind(screening.end_time)
        .bind(screening.base_price)
        .bind(screening.premium_price)
        .bind(screening.available_seats)
        .bind(&screening.audio_format)
        .bind(&screening.video_format)
        .bind(screening.is_active)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db("Failed to update screening"))?;

        tx.commit().await.map_err(db("Failed to commit screening update"))?;
        Ok(updated)
    }

    pub async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE screenings SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db("Failed to delete screening"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn lock_screen(tx: &mut Transaction<'_, Postgres>, screen_id: i64) -> AppResult<()> {
        let locked: Option<i64> = sqlx::query_scalar("SELECT id FROM screens WHERE id = $1 FOR UPDATE")
            .bind(screen_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(db("Failed to lock screen"))?;

        locked
            .map(|_| ())
            .ok_or_else(|| AppError::validation("Screen not found"))
    }

    /// Active, non-deleted screenings on one screen and date.
    async fn schedule_for(
        tx: &mut Transaction<'_, Postgres>,
        screen_id: i64,
        date: NaiveDate,
        exclude_id: Option<i64>,
    ) -> AppResult<Vec<Screening>> {
        sqlx::query_as::<_, Screening>(&format!(
            "SELECT {COLUMNS} FROM screenings \
             WHERE screen_id = $1 AND show_date = $2 AND is_active AND deleted_at IS NULL \
               AND ($3::BIGINT IS NULL OR id <> $3) \
             ORDER BY show_time"
        ))
        .bind(screen_id)
        .bind(date)
        .bind(exclude_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(db("Failed to load screen schedule"))
    }
}
