//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Bootstrap admin account and role protection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Email of the admin account created on first start.
    #[serde(default = "default_admin_email")]
    pub bootstrap_admin_email: String,
    /// Initial password of that account.
    #[serde(default = "default_admin_password")]
    pub bootstrap_admin_password: String,
    /// Display name of that account.
    #[serde(default = "default_admin_name")]
    pub bootstrap_admin_name: String,
    /// Role names that can never be deleted.
    #[serde(default = "default_protected_roles")]
    pub protected_roles: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bootstrap_admin_email: default_admin_email(),
            bootstrap_admin_password: default_admin_password(),
            bootstrap_admin_name: default_admin_name(),
            protected_roles: default_protected_roles(),
        }
    }
}

impl AuthConfig {
    /// Case-sensitive check against the protected role list.
    pub fn is_protected_role(&self, name: &str) -> bool {
        self.protected_roles.iter().any(|r| r == name)
    }
}

fn default_admin_email() -> String {
    "admin@showtime.local".to_string()
}

fn default_admin_password() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_admin_name() -> String {
    "Administrator".to_string()
}

fn default_protected_roles() -> Vec<String> {
    vec![
        "admin".to_string(),
        "user".to_string(),
        "superadmin".to_string(),
    ]
}
