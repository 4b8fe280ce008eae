//! # showtime-core
//!
//! Core crate for the Showtime theater administration API. Contains the
//! cache and patch traits, configuration schemas, pagination and response
//! envelope types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Showtime crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
