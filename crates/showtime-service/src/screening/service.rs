//! Screening service.
//!
//! Creation and schedule-moving updates hand the conflict check to the
//! repository as a closure, so it runs inside the transaction that holds
//! the screen's row lock.

use chrono::{NaiveDate, NaiveTime};
use tracing::info;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::traits::Patch;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_database::repositories::{
    LanguageRepository, MovieRepository, ScreenRepository, ScreeningFilter, ScreeningRepository,
};
use showtime_entity::screening::{NewScreening, Screening, ScreeningListing, ScreeningPatch};
use showtime_entity::venue::Screen;

use crate::scheduling::{TimeSlot, find_conflict};

/// A screening request; `available_seats` defaults to the screen capacity.
#[derive(Debug, Clone)]
pub struct CreateScreening {
    pub movie_id: i64,
    pub screen_id: i64,
    pub language_id: i64,
    pub subtitle_language_id: Option<i64>,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub end_time: NaiveTime,
    pub base_price: f64,
    pub premium_price: Option<f64>,
    pub available_seats: Option<i32>,
    pub audio_format: Option<String>,
    pub video_format: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ScreeningService {
    screenings: ScreeningRepository,
    movies: MovieRepository,
    screens: ScreenRepository,
    languages: LanguageRepository,
}

impl ScreeningService {
    pub fn new(
        screenings: ScreeningRepository,
        movies: MovieRepository,
        screens: ScreenRepository,
        languages: LanguageRepository,
    ) -> Self {
        Self {
            screenings,
            movies,
            screens,
            languages,
        }
    }

    pub async fn list(
        &self,
        filter: &ScreeningFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ScreeningListing>> {
        self.screenings.list(filter, page).await
    }

    pub async fn get(&self, id: i64) -> AppResult<ScreeningListing> {
        self.screenings
            .find_listing(id)
            .await?
            .ok_or_else(|| AppError::not_found("Screening not found"))
    }

    pub async fn create(&self, req: CreateScreening) -> AppResult<Screening> {
        let slot = TimeSlot::new(req.screen_id, req.show_date, req.show_time, req.end_time)?;
        let screen = self.require_screen(req.screen_id).await?;
        self.require_refs(req.movie_id, req.language_id, req.subtitle_language_id)
            .await?;

        let data = NewScreening {
            movie_id: req.movie_id,
            screen_id: req.screen_id,
            language_id: req.language_id,
            subtitle_language_id: req.subtitle_language_id,
            show_date: req.show_date,
            show_time: req.show_time,
            end_time: req.end_time,
            base_price: req.base_price,
            premium_price: req.premium_price,
            available_seats: req.available_seats.unwrap_or(screen.capacity),
            audio_format: req.audio_format,
            video_format: req.video_format,
        };

        let screening = self
            .screenings
            .create_checked(&data, |existing| reject_conflict(&slot, existing))
            .await?;

        info!(
            screening_id = screening.id,
            screen_id = screening.screen_id,
            show_date = %screening.show_date,
            "Screening scheduled"
        );
        Ok(screening)
    }

    /// Merge the patch; the conflict check reruns, excluding this screening,
    /// when the patch can move it and the result is active.
    pub async fn update(&self, id: i64, patch: &ScreeningPatch) -> AppResult<Screening> {
        let current = self
            .screenings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Screening not found"))?;
        if patch.is_empty() {
            return Ok(current);
        }

        let merged = patch.merge(&current);
        let slot = TimeSlot::new(
            merged.screen_id,
            merged.show_date,
            merged.show_time,
            merged.end_time,
        )?;

        if patch.screen_id.is_some() {
            self.require_screen(merged.screen_id).await?;
        }
        if patch.movie_id.is_some()
            || patch.language_id.is_some()
            || patch.subtitle_language_id.is_some()
        {
            self.require_refs(
                merged.movie_id,
                merged.language_id,
                merged.subtitle_language_id,
            )
            .await?;
        }

        let check = (patch.touches_schedule() && merged.is_active)
            .then_some(|existing: &[Screening]| reject_conflict(&slot, existing));

        let updated = self
            .screenings
            .update_checked(&merged, check)
            .await?
            .ok_or_else(|| AppError::not_found("Screening not found"))?;

        info!(screening_id = id, "Screening updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.screenings.soft_delete(id).await? {
            return Err(AppError::not_found("Screening not found"));
        }
        info!(screening_id = id, "Screening deleted");
        Ok(())
    }

    async fn require_screen(&self, id: i64) -> AppResult<Screen> {
        self.screens
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::validation("Screen not found"))
    }

    async fn require_refs(
        &self,
        movie_id: i64,
        language_id: i64,
        subtitle_language_id: Option<i64>,
    ) -> AppResult<()> {
        if self.movies.find_by_id(movie_id).await?.is_none() {
            return Err(AppError::validation("Movie not found"));
        }
        if self.languages.find_by_id(language_id).await?.is_none() {
            return Err(AppError::validation("Language not found"));
        }
        if let Some(subtitle_id) = subtitle_language_id
            && self.languages.find_by_id(subtitle_id).await?.is_none()
        {
            return Err(AppError::validation("Subtitle language not found"));
        }
        Ok(())
    }
}

fn reject_conflict(slot: &TimeSlot, existing: &[Screening]) -> AppResult<()> {
    match find_conflict(slot, existing) {
        Some(conflict) => Err(conflict.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn screening(id: i64, start: NaiveTime, end: NaiveTime) -> Screening {
        Screening {
            id,
            movie_id: 1,
            screen_id: 7,
            language_id: 1,
            subtitle_language_id: None,
            show_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            show_time: start,
            end_time: end,
            base_price: 200.0,
            premium_price: None,
            available_seats: 100,
            audio_format: None,
            video_format: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn reject_conflict_names_the_colliding_screening() {
        let existing = [screening(41, t(10, 0), t(12, 0))];
        let slot = TimeSlot::new(7, existing[0].show_date, t(11, 59), t(13, 0)).unwrap();
        let err = reject_conflict(&slot, &existing).unwrap_err();
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Conflict);
        assert!(err.message.contains("41"));

        let touching = TimeSlot::new(7, existing[0].show_date, t(12, 0), t(14, 0)).unwrap();
        assert!(reject_conflict(&touching, &existing).is_ok());
    }
}
