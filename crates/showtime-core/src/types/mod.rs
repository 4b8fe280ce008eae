//! Core type definitions used across the Showtime workspace.

pub mod pagination;
pub mod response;

pub use pagination::{PageRequest, PageResponse};
pub use response::{PaginatedResponse, Response};
