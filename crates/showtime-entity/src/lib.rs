//! # showtime-entity
//!
//! Domain entity models for the Showtime theater administration API.
//! Every struct in this crate represents a database table row or a domain
//! value object. Database entities derive `sqlx::FromRow`; partial updates
//! are expressed as `*Patch` structs implementing [`showtime_core::traits::Patch`].

pub mod catalog;
pub mod screening;
pub mod session;
pub mod user;
pub mod venue;
