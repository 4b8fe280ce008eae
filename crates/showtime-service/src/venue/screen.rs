//! Screen service.
//!
//! Every write that carries a layout expands it into seats first, so the
//! stored capacity always equals the number of persisted seats.

use serde_json::Value;
use tracing::info;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_database::repositories::{ScreenRepository, TheaterRepository};
use showtime_entity::venue::{NewScreen, Screen, ScreenWithSeats};

use crate::layout::{self, ExpandedLayout};

#[derive(Debug, Clone)]
pub struct CreateScreen {
    pub name: String,
    pub theater_id: i64,
    pub seat_layout: Value,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateScreen {
    pub name: Option<String>,
    pub seat_layout: Option<Value>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ScreenService {
    screens: ScreenRepository,
    theaters: TheaterRepository,
}

impl ScreenService {
    pub fn new(screens: ScreenRepository, theaters: TheaterRepository) -> Self {
        Self { screens, theaters }
    }

    pub async fn list(
        &self,
        theater_id: Option<i64>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Screen>> {
        self.screens.list(theater_id, page).await
    }

    pub async fn get(&self, id: i64) -> AppResult<ScreenWithSeats> {
        let screen = self.find(id).await?;
        let seats = self.screens.list_seats(id).await?;
        Ok(ScreenWithSeats { screen, seats })
    }

    pub async fn create(&self, req: CreateScreen) -> AppResult<ScreenWithSeats> {
        if self.theaters.find_by_id(req.theater_id).await?.is_none() {
            return Err(AppError::validation("Theater not found"));
        }
        let expanded = expand_document(&req.seat_layout)?;

        let data = NewScreen {
            name: req.name,
            theater_id: req.theater_id,
            capacity: expanded.capacity,
            seat_layout: req.seat_layout,
            is_active: req.is_active,
        };
        let screen = self.screens.create_with_seats(&data, &expanded.seats).await?;
        info!(
            screen_id = screen.id,
            theater_id = screen.theater_id,
            capacity = screen.capacity,
            "Screen created"
        );
        self.get(screen.id).await
    }

    /// Apply the update and regenerate every seat from the resulting layout.
    /// Seat status is not carried over: every seat comes back as available.
    pub async fn update(&self, id: i64, req: UpdateScreen) -> AppResult<ScreenWithSeats> {
        let mut screen = self.find(id).await?;

        if let Some(name) = req.name {
            screen.name = name;
        }
        if let Some(active) = req.is_active {
            screen.is_active = active;
        }
        if let Some(document) = req.seat_layout {
            screen.seat_layout = document;
        }

        let expanded = expand_document(&screen.seat_layout)?;
        screen.capacity = expanded.capacity;

        self.screens
            .replace_layout(&screen, &expanded.seats)
            .await?
            .ok_or_else(|| AppError::not_found("Screen not found"))?;

        info!(screen_id = id, capacity = screen.capacity, "Screen layout regenerated");
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.screens.delete(id).await? {
            return Err(AppError::not_found("Screen not found"));
        }
        info!(screen_id = id, "Screen deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<Screen> {
        self.screens
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Screen not found"))
    }
}

fn expand_document(document: &Value) -> AppResult<ExpandedLayout> {
    let config = layout::parse(document)?;
    layout::expand(&config)
}
