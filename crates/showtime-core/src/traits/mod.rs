//! Core traits defined in `showtime-core` and implemented by other crates.

pub mod cache;
pub mod patch;

pub use cache::CacheProvider;
pub use patch::Patch;
