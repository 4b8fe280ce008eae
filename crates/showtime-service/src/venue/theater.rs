//! Theater service.

use tracing::info;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::traits::Patch;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_database::repositories::{ScreenRepository, TheaterFilter, TheaterRepository};
use showtime_entity::venue::{NewTheater, Theater, TheaterPatch, TheaterWithScreens};

#[derive(Debug, Clone)]
pub struct TheaterService {
    theaters: TheaterRepository,
    screens: ScreenRepository,
}

impl TheaterService {
    pub fn new(theaters: TheaterRepository, screens: ScreenRepository) -> Self {
        Self { theaters, screens }
    }

    pub async fn list(
        &self,
        filter: &TheaterFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Theater>> {
        self.theaters.list(filter, page).await
    }

    pub async fn get(&self, id: i64) -> AppResult<TheaterWithScreens> {
        let theater = self.find(id).await?;
        let screens = self.screens.list_by_theater(id).await?;
        Ok(TheaterWithScreens { theater, screens })
    }

    pub async fn create(&self, data: &NewTheater) -> AppResult<Theater> {
        let theater = self.theaters.create(data).await?;
        info!(theater_id = theater.id, name = %theater.name, "Theater created");
        Ok(theater)
    }

    pub async fn update(&self, id: i64, patch: &TheaterPatch) -> AppResult<Theater> {
        let current = self.find(id).await?;
        if patch.is_empty() {
            return Ok(current);
        }
        self.theaters
            .update(&patch.merge(&current))
            .await?
            .ok_or_else(|| AppError::not_found("Theater not found"))
    }

    pub async fn toggle(&self, id: i64) -> AppResult<Theater> {
        let theater = self
            .theaters
            .toggle_active(id)
            .await?
            .ok_or_else(|| AppError::not_found("Theater not found"))?;
        info!(theater_id = id, is_active = theater.is_active, "Theater toggled");
        Ok(theater)
    }

    /// Theaters that still own screens cannot be deleted.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;
        if self.theaters.has_screens(id).await? {
            return Err(AppError::conflict("Theater still has screens"));
        }
        self.theaters.delete(id).await?;
        info!(theater_id = id, "Theater deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<Theater> {
        self.theaters
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Theater not found"))
    }
}
