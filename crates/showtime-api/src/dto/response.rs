//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use showtime_entity::user::UserWithRole;
use showtime_service::LoginOutcome;

/// The admin as shown in the admin login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&UserWithRole> for AdminSummary {
    fn from(user: &UserWithRole) -> Self {
        Self {
            id: user.user.id,
            email: user.user.email.clone(),
            name: user.user.name.clone(),
            role: user.role.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub admin: AdminSummary,
}

impl From<LoginOutcome> for AdminLoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            admin: AdminSummary::from(&outcome.user),
            token: outcome.token,
            expires_at: outcome.expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when every dependency answers, `"degraded"` otherwise.
    pub status: String,
    pub version: String,
    pub database: String,
    pub cache: String,
}
