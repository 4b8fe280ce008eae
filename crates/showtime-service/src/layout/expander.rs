//! Expands a [`SeatLayoutConfig`] into seat records.
//!
//! Cells are visited in row-major order. `walkway` and `empty` cells produce
//! nothing; every other cell produces exactly one seat in status
//! `available`. Attribute resolution is deterministic, so expanding the same
//! config twice yields identical seats.

use std::collections::HashSet;

use serde::Deserialize;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_entity::venue::{NewSeat, SeatLayoutConfig, SeatPosition, SeatStatus};

use super::naming::row_label;

/// Column widths of the `seats` table.
const MAX_ROW_LABEL_LEN: usize = 10;
const MAX_SEAT_NUMBER_LEN: usize = 20;
const MAX_SEAT_TYPE_LEN: usize = 50;

/// Seats produced by one expansion pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedLayout {
    pub seats: Vec<NewSeat>,
    pub capacity: i32,
}

/// Parse a stored or submitted layout document.
pub fn parse(value: &serde_json::Value) -> AppResult<SeatLayoutConfig> {
    SeatLayoutConfig::deserialize(value)
        .map_err(|e| AppError::validation(format!("Invalid seat layout: {e}")))
}

/// Number of seats `config` expands to, counted without building them.
pub fn capacity(config: &SeatLayoutConfig) -> usize {
    config.seat_cell_count()
}

/// Expand every seat cell of `config`.
pub fn expand(config: &SeatLayoutConfig) -> AppResult<ExpandedLayout> {
    let capacity = capacity(config);
    if capacity == 0 {
        return Err(AppError::validation(
            "Seat layout must contain at least one seat",
        ));
    }

    let mut seats = Vec::with_capacity(capacity);
    let mut seen = HashSet::with_capacity(capacity);
    let mut seat_row_index = 0usize;

    for row in &config.layout {
        if !row.iter().any(SeatPosition::is_seat) {
            continue;
        }

        let derived_label = row_label(seat_row_index, &config.row_naming, &config.custom_row_names);
        let mut ordinal = 0usize;

        for (col, cell) in row.iter().enumerate() {
            if !cell.is_seat() {
                continue;
            }
            ordinal += 1;

            let seat = resolve(config, cell, &derived_label, seat_row_index, col, ordinal);
            check_widths(&seat)?;
            if !seen.insert(seat.seat_number.clone()) {
                return Err(AppError::validation(format!(
                    "Duplicate seat number '{}' in layout",
                    seat.seat_number
                )));
            }
            seats.push(seat);
        }

        seat_row_index += 1;
    }

    Ok(ExpandedLayout {
        capacity: seats.len() as i32,
        seats,
    })
}

fn resolve(
    config: &SeatLayoutConfig,
    cell: &SeatPosition,
    derived_label: &str,
    seat_row_index: usize,
    col: usize,
    ordinal: usize,
) -> NewSeat {
    let seat_type = cell.effective_type().to_string();
    let type_config = config.seat_types.get(&seat_type);

    let row = non_empty(&cell.row).unwrap_or(derived_label).to_string();
    let column = if cell.column > 0 {
        cell.column
    } else {
        col as i32 + 1
    };

    let seat_number = non_empty(&cell.number)
        .or_else(|| non_empty(&cell.custom_number))
        .map(str::to_string)
        .unwrap_or_else(|| match config.numbering_scheme.as_str() {
            "numeric" => format!("{}-{ordinal}", seat_row_index + 1),
            _ => format!("{row}{ordinal}"),
        });

    let price = if cell.price > 0.0 {
        cell.price
    } else if let Some(tier) = config.pricing_tiers.get(&seat_type) {
        *tier
    } else {
        type_config.map_or(0.0, |t| t.price)
    };

    let is_accessible = cell.is_accessible
        || config.accessible_seats.contains(&seat_number)
        || type_config.is_some_and(|t| t.is_accessible);

    NewSeat {
        seat_number,
        row,
        column,
        seat_type,
        status: SeatStatus::Available,
        price,
        is_accessible,
    }
}

fn check_widths(seat: &NewSeat) -> AppResult<()> {
    let fields = [
        ("Row label", &seat.row, MAX_ROW_LABEL_LEN),
        ("Seat number", &seat.seat_number, MAX_SEAT_NUMBER_LEN),
        ("Seat type", &seat.seat_type, MAX_SEAT_TYPE_LEN),
    ];
    for (name, value, max) in fields {
        if value.chars().count() > max {
            return Err(AppError::validation(format!(
                "{name} '{value}' exceeds {max} characters"
            )));
        }
    }
    Ok(())
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use showtime_entity::venue::SeatTypeConfig;

    use super::*;

    fn cell(seat_type: &str) -> SeatPosition {
        SeatPosition {
            seat_type: seat_type.to_string(),
            ..Default::default()
        }
    }

    fn grid(rows: usize, cols: usize, walkway_row: Option<usize>) -> SeatLayoutConfig {
        let layout = (0..rows)
            .map(|r| {
                let kind = if Some(r) == walkway_row { "walkway" } else { "normal" };
                (0..cols).map(|_| cell(kind)).collect()
            })
            .collect();
        SeatLayoutConfig {
            rows: rows as u32,
            columns: cols as u32,
            row_naming: "alphabetic".to_string(),
            numbering_scheme: "alphabetic".to_string(),
            layout,
            ..Default::default()
        }
    }

    #[test]
    fn walkway_row_removes_one_row_of_seats() {
        let (r, c) = (5, 8);
        let config = grid(r, c, Some(1));
        let expanded = expand(&config).unwrap();
        assert_eq!(expanded.seats.len(), r * c - c);
        assert_eq!(expanded.capacity as usize, r * c - c);
        assert_eq!(capacity(&config), expanded.seats.len());
    }

    #[test]
    fn rows_after_walkway_keep_consecutive_labels() {
        let expanded = expand(&grid(3, 2, Some(1))).unwrap();
        let numbers: Vec<&str> = expanded.seats.iter().map(|s| s.seat_number.as_str()).collect();
        assert_eq!(numbers, ["A1", "A2", "B1", "B2"]);
        assert_eq!(expanded.seats[2].row, "B");
        assert_eq!(expanded.seats[3].column, 2);
    }

    #[test]
    fn expansion_is_deterministic() {
        let config = grid(4, 6, Some(2));
        assert_eq!(expand(&config).unwrap(), expand(&config).unwrap());
        assert!(
            expand(&config)
                .unwrap()
                .seats
                .iter()
                .all(|s| s.status == SeatStatus::Available)
        );
    }

    #[test]
    fn walkway_cells_skip_ordinals() {
        let mut config = grid(1, 4, None);
        config.layout[0][1] = cell("walkway");
        config.layout[0][2] = cell("empty");
        let expanded = expand(&config).unwrap();
        let seats: Vec<(&str, i32)> = expanded
            .seats
            .iter()
            .map(|s| (s.seat_number.as_str(), s.column))
            .collect();
        assert_eq!(seats, [("A1", 1), ("A2", 4)]);
    }

    #[test]
    fn numeric_scheme_uses_row_index() {
        let mut config = grid(2, 2, None);
        config.numbering_scheme = "numeric".to_string();
        config.row_naming = "numeric".to_string();
        let expanded = expand(&config).unwrap();
        assert_eq!(expanded.seats[3].seat_number, "2-2");
        assert_eq!(expanded.seats[3].row, "2");
    }

    #[test]
    fn explicit_cell_values_win() {
        let mut config = grid(1, 2, None);
        config.layout[0][0] = SeatPosition {
            row: "Z".to_string(),
            column: 9,
            seat_type: "premium".to_string(),
            number: "P-1".to_string(),
            price: 450.0,
            is_accessible: true,
            custom_number: "ignored".to_string(),
        };
        config.layout[0][1].custom_number = "C-7".to_string();

        let expanded = expand(&config).unwrap();
        let first = &expanded.seats[0];
        assert_eq!(
            (first.row.as_str(), first.column, first.seat_number.as_str()),
            ("Z", 9, "P-1")
        );
        assert_eq!(first.price, 450.0);
        assert!(first.is_accessible);
        assert_eq!(expanded.seats[1].seat_number, "C-7");
    }

    #[test]
    fn price_and_accessibility_fall_back_through_config() {
        let mut config = grid(1, 3, None);
        config.layout[0][0] = cell("premium");
        config.layout[0][1] = cell("recliner");
        config.pricing_tiers = HashMap::from([("premium".to_string(), 300.0)]);
        config.seat_types = HashMap::from([
            (
                "premium".to_string(),
                SeatTypeConfig {
                    price: 999.0,
                    ..Default::default()
                },
            ),
            (
                "recliner".to_string(),
                SeatTypeConfig {
                    price: 500.0,
                    is_accessible: true,
                    ..Default::default()
                },
            ),
        ]);
        config.accessible_seats = vec!["A3".to_string()];

        let seats = expand(&config).unwrap().seats;
        assert_eq!(seats[0].price, 300.0);
        assert_eq!(seats[1].price, 500.0);
        assert!(seats[1].is_accessible);
        assert_eq!(seats[2].price, 0.0);
        assert_eq!(seats[2].seat_type, "normal");
        assert!(seats[2].is_accessible);
        assert!(!seats[0].is_accessible);
    }

    #[test]
    fn duplicate_numbers_are_rejected() {
        let mut config = grid(1, 2, None);
        config.layout[0][0].number = "X".to_string();
        config.layout[0][1].number = "X".to_string();
        let err = expand(&config).unwrap_err();
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Validation);
    }

    #[test]
    fn layout_without_seats_is_rejected() {
        assert!(expand(&grid(2, 2, Some(0))).is_ok());
        let config = grid(1, 2, Some(0));
        assert!(expand(&config).is_err());
        assert!(expand(&SeatLayoutConfig::default()).is_err());
    }

    #[test]
    fn long_custom_row_name_is_rejected() {
        let mut config = grid(1, 2, None);
        config.row_naming = "custom".to_string();
        config.custom_row_names = vec!["Balcony-Left".to_string()];
        let err = expand(&config).unwrap_err();
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Validation);
        assert!(err.message.contains("Row label"));

        config.custom_row_names = vec!["Balcony-L".to_string()];
        assert!(expand(&config).is_ok());
    }

    #[test]
    fn long_seat_number_is_rejected() {
        let mut config = grid(1, 2, None);
        config.layout[0][0].number = "N".repeat(21);
        let err = expand(&config).unwrap_err();
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Validation);
        assert!(err.message.contains("Seat number"));

        config.layout[0][0].number = "N".repeat(20);
        assert!(expand(&config).is_ok());
    }

    #[test]
    fn long_seat_type_is_rejected() {
        let mut config = grid(1, 2, None);
        config.layout[0][1] = cell(&"t".repeat(51));
        let err = expand(&config).unwrap_err();
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Validation);
        assert!(err.message.contains("Seat type"));
    }

    #[test]
    fn parses_submitted_json() {
        let value = json!({
            "rows": 1,
            "columns": 2,
            "layout": [[{"type": "normal"}, {"type": "walkway"}]]
        });
        let config = parse(&value).unwrap();
        assert_eq!(capacity(&config), 1);
        assert!(parse(&json!({"layout": "nope"})).is_err());
    }
}
