//! Login, logout, and profile lookup.

pub mod service;

pub use service::{AuthService, LoginOutcome};
