//! # showtime-auth
//!
//! Session-based authentication for Showtime.
//!
//! ## Modules
//!
//! - `session`: opaque-token session lifecycle backed by the session cache
//! - `access`: bearer extraction and the per-request access gate
//! - `password`: Argon2id password hashing

pub mod access;
pub mod password;
pub mod session;

pub use access::{AccessGate, AccessLevel, Identity};
pub use password::PasswordHasher;
pub use session::{ClientInfo, SessionError, SessionManager};
