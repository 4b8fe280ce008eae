//! Screening schedule conflict detection.

pub mod conflict;

pub use conflict::{SchedulingConflict, TimeSlot, find_conflict};
