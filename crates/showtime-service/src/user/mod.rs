//! Admin user management.

pub mod service;

pub use service::{CreateUser, UpdateUser, UserService};
