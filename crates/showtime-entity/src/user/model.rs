//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use showtime_core::traits::Patch;

use super::role::Role;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    /// Unique among non-deleted users (case-insensitive).
    pub email: String,
    /// Argon2id PHC string.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub name: String,
    pub role_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip_serializing, default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Active and not soft-deleted.
    pub fn can_login(&self) -> bool {
        self.is_active && !self.is_deleted()
    }
}

/// A user joined with its role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRole {
    #[serde(flatten)]
    pub user: User,
    pub role: Role,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    pub name: String,
    pub role_id: i64,
    pub is_active: bool,
}

/// Partial update of a user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    /// Pre-hashed replacement password.
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub role_id: Option<i64>,
    pub is_active: Option<bool>,
}

impl Patch<User> for UserPatch {
    fn apply_to(&self, target: &mut User) {
        if let Some(email) = &self.email {
            target.email = email.clone();
        }
        if let Some(hash) = &self.password_hash {
            target.password_hash = hash.clone();
        }
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(role_id) = self.role_id {
            target.role_id = role_id;
        }
        if let Some(active) = self.is_active {
            target.is_active = active;
        }
    }

    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password_hash.is_none()
            && self.name.is_none()
            && self.role_id.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: 7,
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            name: "Ana".to_string(),
            role_id: 2,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let user = sample();
        let patch = UserPatch {
            name: Some("Ana Maria".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        let merged = patch.merge(&user);
        assert_eq!(merged.name, "Ana Maria");
        assert!(!merged.is_active);
        assert_eq!(merged.email, user.email);
        assert_eq!(merged.role_id, user.role_id);
        assert_eq!(merged.password_hash, user.password_hash);
    }

    #[test]
    fn empty_patch() {
        assert!(UserPatch::default().is_empty());
        let patch = UserPatch {
            role_id: Some(3),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("deleted_at").is_none());
        assert_eq!(json["email"], "ana@example.com");
    }

    #[test]
    fn deleted_user_cannot_login() {
        let mut user = sample();
        assert!(user.can_login());
        user.deleted_at = Some(Utc::now());
        assert!(!user.can_login());
    }
}
