//! Movie certification rating.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Certification stored in the `movie_rating` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "movie_rating")]
pub enum MovieRating {
    /// Universal.
    #[serde(rename = "U")]
    #[sqlx(rename = "U")]
    U,
    /// Universal, parental guidance.
    #[serde(rename = "U/A")]
    #[sqlx(rename = "U/A")]
    UA,
    /// Adults only.
    #[serde(rename = "A")]
    #[sqlx(rename = "A")]
    A,
    /// Restricted to specialized audiences.
    #[serde(rename = "S")]
    #[sqlx(rename = "S")]
    S,
}

impl MovieRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::U => "U",
            Self::UA => "U/A",
            Self::A => "A",
            Self::S => "S",
        }
    }
}

impl fmt::Display for MovieRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MovieRating {
    type Err = showtime_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "U" => Ok(Self::U),
            "U/A" | "UA" => Ok(Self::UA),
            "A" => Ok(Self::A),
            "S" => Ok(Self::S),
            _ => Err(showtime_core::AppError::validation(format!(
                "Invalid rating: '{s}'. Expected one of: U, U/A, A, S"
            ))),
        }
    }
}
