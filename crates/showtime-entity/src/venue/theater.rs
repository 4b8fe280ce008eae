//! Theater entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use showtime_core::traits::Patch;

use super::screen::Screen;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Theater {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Theater {
    /// Flip the active flag.
    pub fn toggled(mut self) -> Self {
        self.is_active = !self.is_active;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheaterWithScreens {
    #[serde(flatten)]
    pub theater: Theater,
    pub screens: Vec<Screen>,
}

#[derive(Debug, Clone)]
pub struct NewTheater {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TheaterPatch {
    pub name: Option<String>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Patch<Theater> for TheaterPatch {
    fn apply_to(&self, target: &mut Theater) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(address) = &self.address {
            target.address = address.clone();
        }
        if let Some(city) = &self.city {
            target.city = city.clone();
        }
        if let Some(state) = &self.state {
            target.state = state.clone();
        }
        if let Some(active) = self.is_active {
            target.is_active = active;
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.is_active.is_none()
    }
}
