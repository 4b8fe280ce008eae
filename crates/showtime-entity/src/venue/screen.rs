//! Screen entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::seat::Seat;

/// An auditorium inside a theater.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Screen {
    pub id: i64,
    pub name: String,
    pub theater_id: i64,
    /// Number of seats produced by the current layout.
    pub capacity: i32,
    /// The layout document exactly as submitted.
    pub seat_layout: serde_json::Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenWithSeats {
    #[serde(flatten)]
    pub screen: Screen,
    pub seats: Vec<Seat>,
}

#[derive(Debug, Clone)]
pub struct NewScreen {
    pub name: String,
    pub theater_id: i64,
    pub capacity: i32,
    pub seat_layout: serde_json::Value,
    pub is_active: bool,
}
