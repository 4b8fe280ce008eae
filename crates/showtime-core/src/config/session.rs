//! Session TTL policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session lifetime configuration.
///
/// Two TTL classes exist. The role named `admin` receives the long class,
/// every other role the short one, both at login and on each extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lifetime of admin-class sessions in hours.
    #[serde(default = "default_admin_ttl")]
    pub admin_ttl_hours: u64,
    /// Lifetime of user-class sessions in hours.
    #[serde(default = "default_user_ttl")]
    pub user_ttl_hours: u64,
    /// Random bytes per session token (never below 32).
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            admin_ttl_hours: default_admin_ttl(),
            user_ttl_hours: default_user_ttl(),
            token_bytes: default_token_bytes(),
        }
    }
}

impl SessionConfig {
    pub fn admin_ttl(&self) -> Duration {
        Duration::from_secs(self.admin_ttl_hours * 3600)
    }

    pub fn user_ttl(&self) -> Duration {
        Duration::from_secs(self.user_ttl_hours * 3600)
    }
}

fn default_admin_ttl() -> u64 {
    24
}

fn default_user_ttl() -> u64 {
    8
}

fn default_token_bytes() -> usize {
    32
}
