//! Custom Axum extractors.

pub mod client;
pub mod json;
pub mod pagination;

pub use client::ClientMeta;
pub use json::ValidatedJson;
pub use pagination::PaginationParams;
