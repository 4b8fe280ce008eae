//! Seat entity and status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Booking status of a physical seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "seat_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    Available,
    Booked,
    Blocked,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeatStatus {
    type Err = showtime_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "blocked" => Ok(Self::Blocked),
            _ => Err(showtime_core::AppError::validation(format!(
                "Invalid seat status: '{s}'. Expected one of: available, booked, blocked"
            ))),
        }
    }
}

/// One physical seat of a screen.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Seat {
    pub id: i64,
    pub screen_id: i64,
    pub seat_number: String,
    #[serde(rename = "row")]
    pub row_label: String,
    #[serde(rename = "column")]
    pub column_index: i32,
    pub seat_type: String,
    pub status: SeatStatus,
    pub price: f64,
    pub is_accessible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A seat produced by layout expansion, not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSeat {
    pub seat_number: String,
    pub row: String,
    pub column: i32,
    pub seat_type: String,
    pub status: SeatStatus,
    pub price: f64,
    pub is_accessible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [SeatStatus::Available, SeatStatus::Booked, SeatStatus::Blocked] {
            assert_eq!(status.as_str().parse::<SeatStatus>().unwrap(), status);
        }
        assert!("reserved".parse::<SeatStatus>().is_err());
        assert_eq!(SeatStatus::default(), SeatStatus::Available);
    }
}
