//! Admin-only handlers. Every route here sits behind the admin gate.

pub mod genres;
pub mod languages;
pub mod movies;
pub mod roles;
pub mod screenings;
pub mod screens;
pub mod theaters;
pub mod users;
