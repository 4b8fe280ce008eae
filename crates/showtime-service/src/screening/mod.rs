//! Screening scheduling.

pub mod service;

pub use service::{CreateScreening, ScreeningService};
