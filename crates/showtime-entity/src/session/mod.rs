//! Cache-resident session records.

pub mod model;

pub use model::Session;
