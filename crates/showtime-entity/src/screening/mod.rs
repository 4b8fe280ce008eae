//! Scheduled showings.

pub mod model;

pub use model::{NewScreening, Screening, ScreeningListing, ScreeningPatch};
