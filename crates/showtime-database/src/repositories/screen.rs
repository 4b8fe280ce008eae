//! Screen repository: screens and their seats.

use sqlx::{PgPool, Postgres, Transaction};

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::venue::{NewScreen, NewSeat, Screen, Seat};

use crate::error::{db, is_foreign_key_violation, unique_violation};

const SEAT_NUMBER_KEY: &str = "seats_screen_seat_number_key";

#[derive(Debug, Clone)]
pub struct ScreenRepository {
    pool: PgPool,
}

impl ScreenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        theater_id: Option<i64>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Screen>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM screens WHERE ($1::BIGINT IS NULL OR theater_id = $1)",
        )
        .bind(theater_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db("Failed to count screens"))?;

        let screens = sqlx::query_as::<_, Screen>(
            "SELECT * FROM screens WHERE ($1::BIGINT IS NULL OR theater_id = $1) \
             ORDER BY theater_id, name, id LIMIT $2 OFFSET $3",
        )
        .bind(theater_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list screens"))?;

        Ok(PageResponse::new(screens, page, total as u64))
    }

    pub async fn list_by_theater(&self, theater_id: i64) -> AppResult<Vec<Screen>> {
        sqlx::query_as::<_, Screen>("SELECT * FROM screens WHERE theater_id = $1 ORDER BY name, id")
            .bind(theater_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db("Failed to list theater screens"))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Screen>> {
        sqlx::query_as::<_, Screen>("SELECT * FROM screens WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find screen"))
    }

    /// Seats of a screen in row-major order.
    pub async fn list_seats(&self, screen_id: i64) -> AppResult<Vec<Seat>> {
        sqlx::query_as::<_, Seat>("SELECT * FROM seats WHERE screen_id = $1 ORDER BY id")
            .bind(screen_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db("Failed to list seats"))
    }

    /// Insert the screen row and all of its seats in one transaction.
    pub async fn create_with_seats(&self, data: &NewScreen, seats: &[NewSeat]) -> AppResult<Screen> {
        let mut tx = self.pool.begin().await.map_err(db("Failed to begin transaction"))?;

        let screen = sqlx::query_as::<_, Screen>(
            "INSERT INTO screens (name, theater_id, capacity, seat_layout, is_active) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.theater_id)
        .bind(data.capacity)
        .bind(&data.seat_layout)
        .bind(data.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(db("Failed to insert screen"))?;

        Self::insert_seats(&mut tx, screen.id, seats).await?;

        tx.commit().await.map_err(db("Failed to commit screen"))?;
        Ok(screen)
    }

    /// Update the screen row and replace every seat in one transaction.
    ///
    /// Seat status set by any booking flow does not survive this call.
    pub async fn replace_layout(
        &self,
        screen: &Screen,
        seats: &[NewSeat],
    ) -> AppResult<Option<Screen>> {
        let mut tx = self.pool.begin().await.map_err(db("Failed to begin transaction"))?;

        let updated = sqlx::query_as::<_, Screen>(
            "UPDATE screens SET name = $2, capacity = $3, seat_layout = $4, is_active = $5, \
                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(screen.id)
        .bind(&screen.name)
        .bind(screen.capacity)
        .bind(&screen.seat_layout)
        .bind(screen.is_active)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db("Failed to update screen"))?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM seats WHERE screen_id = $1")
            .bind(updated.id)
            .execute(&mut *tx)
            .await
            .map_err(db("Failed to clear seats"))?;

        Self::insert_seats(&mut tx, updated.id, seats).await?;

        tx.commit().await.map_err(db("Failed to commit screen update"))?;
        Ok(Some(updated))
    }

    /// Delete a screen; its seats cascade.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM screens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::conflict("Screen has screenings")
                } else {
                    db("Failed to delete screen")(e)
                }
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_seats(
        tx: &mut Transaction<'_, Postgres>,
        screen_id: i64,
        seats: &[NewSeat],
    ) -> AppResult<()> {
        for seat in seats {
            sqlx::query(
                "INSERT INTO seats (screen_id, seat_number, row_label, column_index, seat_type, \
                                    status, price, is_accessible) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(screen_id)
            .bind(&seat.seat_number)
            .bind(&seat.row)
            .bind(seat.column)
            .bind(&seat.seat_type)
            .bind(seat.status)
            .bind(seat.price)
            .bind(seat.is_accessible)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                if unique_violation(&e) == Some(SEAT_NUMBER_KEY) {
                    AppError::validation(format!("Duplicate seat number '{}'", seat.seat_number))
                } else {
                    db("Failed to insert seat")(e)
                }
            })?;
        }
        Ok(())
    }
}
