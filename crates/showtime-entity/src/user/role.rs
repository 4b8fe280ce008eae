//! Role entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Name of the role that unlocks the admin surface.
pub const ADMIN_ROLE: &str = "admin";

/// A named permission bucket. Every user references exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: i64,
    /// Unique role name.
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Exact, case-sensitive comparison with `"admin"`.
    pub fn is_admin(&self) -> bool {
        self.name == ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> Role {
        Role {
            id: 1,
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn admin_check_is_exact() {
        assert!(role("admin").is_admin());
        assert!(!role("Admin").is_admin());
        assert!(!role("superadmin").is_admin());
    }
}
