//! Authenticated identity attached to a request.

use serde::Serialize;

use showtime_entity::user::{Role, User};

/// Which gate a route sits behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Role must be `admin` and the account active.
    Admin,
    /// Any role; the account must be active.
    Active,
}

/// The caller behind a validated session.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub user_id: i64,
    /// The bearer token that admitted the request.
    #[serde(skip)]
    pub session_id: String,
    pub role: Role,
    pub user: User,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
