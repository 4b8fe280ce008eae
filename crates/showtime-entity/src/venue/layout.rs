//! Declarative seat-layout document submitted with a screen.
//!
//! Every field is optional on the wire; absent fields take their
//! `Default`. Expansion into seats lives in the service layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Cell types that never produce a seat.
pub const NON_SEAT_TYPES: [&str; 2] = ["walkway", "empty"];

/// Seat type applied to cells without one.
pub const DEFAULT_SEAT_TYPE: &str = "normal";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatLayoutConfig {
    pub rows: u32,
    pub columns: u32,
    /// `"alphabetic"` (`A1`) or `"numeric"` (`1-1`).
    pub numbering_scheme: String,
    /// `"alphabetic"`, `"numeric"`, or `"custom"`.
    pub row_naming: String,
    pub custom_row_names: Vec<String>,
    pub seat_types: HashMap<String, SeatTypeConfig>,
    /// Row-major grid of cells.
    pub layout: Vec<Vec<SeatPosition>>,
    pub walkway_rows: Vec<u32>,
    pub walkway_cols: Vec<u32>,
    /// Seat numbers flagged for accessible seating.
    pub accessible_seats: Vec<String>,
    /// Price per seat type.
    pub pricing_tiers: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatTypeConfig {
    pub name: String,
    pub color: String,
    pub price: f64,
    pub available: bool,
    pub is_accessible: bool,
    pub icon: String,
    pub description: String,
}

/// One cell of the grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatPosition {
    pub row: String,
    pub column: i32,
    #[serde(rename = "type")]
    pub seat_type: String,
    pub number: String,
    pub price: f64,
    pub is_accessible: bool,
    pub custom_number: String,
}

impl SeatPosition {
    /// The cell type, with an empty tag read as `"normal"`.
    pub fn effective_type(&self) -> &str {
        let t = self.seat_type.trim();
        if t.is_empty() { DEFAULT_SEAT_TYPE } else { t }
    }

    /// Walkway and empty cells produce no seat.
    pub fn is_seat(&self) -> bool {
        !NON_SEAT_TYPES.contains(&self.effective_type())
    }
}

impl SeatLayoutConfig {
    /// Number of seat-producing cells.
    pub fn seat_cell_count(&self) -> usize {
        self.layout
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_seat())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_json_uses_defaults() {
        let raw = r#"{"layout": [[{"type": "premium"}, {"type": "walkway"}, {}]]}"#;
        let cfg: SeatLayoutConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.layout[0].len(), 3);
        assert_eq!(cfg.layout[0][2].effective_type(), "normal");
        assert!(!cfg.layout[0][1].is_seat());
        assert_eq!(cfg.seat_cell_count(), 2);
    }
}
