//! Language entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use showtime_core::traits::Patch;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Language {
    pub id: i64,
    /// Unique short code (`en`, `ta`, `hi`, ...).
    pub code: String,
    pub name: String,
    pub native_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLanguage {
    pub code: String,
    pub name: String,
    pub native_name: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LanguagePatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub native_name: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Patch<Language> for LanguagePatch {
    fn apply_to(&self, target: &mut Language) {
        if let Some(code) = &self.code {
            target.code = code.clone();
        }
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(native) = &self.native_name {
            target.native_name = native.clone();
        }
        if let Some(active) = self.is_active {
            target.is_active = active;
        }
    }

    fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.native_name.is_none()
            && self.is_active.is_none()
    }
}
