//! Route handlers organized by domain.
//!
//! Top-level modules serve the public catalog and session endpoints;
//! `admin` holds the write surface behind the admin gate.

pub mod admin;
pub mod auth;
pub mod genre;
pub mod health;
pub mod language;
pub mod movie;
pub mod screening;
pub mod theater;
