//! Session lifecycle: create, validate, extend, and revoke opaque-token sessions.

pub mod error;
pub mod manager;
pub mod token;

pub use error::SessionError;
pub use manager::{ClientInfo, SessionManager};
