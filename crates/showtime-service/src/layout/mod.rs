//! Seat-layout expansion: declarative grid to flat seat rows.

pub mod expander;
pub mod naming;

pub use expander::{ExpandedLayout, capacity, expand, parse};
