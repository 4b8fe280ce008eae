//! Screening entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use showtime_core::traits::Patch;

/// One showing of a movie on a screen, occupying `[show_time, end_time)`
/// on `show_date`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Screening {
    pub id: i64,
    pub movie_id: i64,
    pub screen_id: i64,
    pub language_id: i64,
    pub subtitle_language_id: Option<i64>,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub end_time: NaiveTime,
    pub base_price: f64,
    pub premium_price: Option<f64>,
    pub available_seats: i32,
    pub audio_format: Option<String>,
    pub video_format: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Screening {
    /// Whether this screening takes part in conflict checks.
    pub fn is_schedulable(&self) -> bool {
        self.is_active && self.deleted_at.is_none()
    }
}

/// A screening joined with the names a listing needs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScreeningListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub screening: Screening,
    pub movie_title: String,
    pub screen_name: String,
    pub theater_id: i64,
    pub theater_name: String,
    pub language_code: String,
    pub language_name: String,
}

#[derive(Debug, Clone)]
pub struct NewScreening {
    pub movie_id: i64,
    pub screen_id: i64,
    pub language_id: i64,
    pub subtitle_language_id: Option<i64>,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub end_time: NaiveTime,
    pub base_price: f64,
    pub premium_price: Option<f64>,
    pub available_seats: i32,
    pub audio_format: Option<String>,
    pub video_format: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScreeningPatch {
    pub movie_id: Option<i64>,
    pub screen_id: Option<i64>,
    pub language_id: Option<i64>,
    pub subtitle_language_id: Option<Option<i64>>,
    pub show_date: Option<NaiveDate>,
    pub show_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub base_price: Option<f64>,
    pub premium_price: Option<Option<f64>>,
    pub available_seats: Option<i32>,
    pub audio_format: Option<Option<String>>,
    pub video_format: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl ScreeningPatch {
    /// Whether applying the patch can move the screening in the schedule.
    pub fn touches_schedule(&self) -> bool {
        self.screen_id.is_some()
            || self.show_date.is_some()
            || self.show_time.is_some()
            || self.end_time.is_some()
            || self.is_active == Some(true)
    }
}

impl Patch<Screening> for ScreeningPatch {
    fn apply_to(&self, target: &mut Screening) {
        if let Some(v) = self.movie_id {
            target.movie_id = v;
        }
        if let Some(v) = self.screen_id {
            target.screen_id = v;
        }
        if let Some(v) = self.language_id {
            target.language_id = v;
        }
        if let Some(v) = self.subtitle_language_id {
            target.subtitle_language_id = v;
        }
        if let Some(v) = self.show_date {
            target.show_date = v;
        }
        if let Some(v) = self.show_time {
            target.show_time = v;
        }
        if let Some(v) = self.end_time {
            target.end_time = v;
        }
        if let Some(v) = self.base_price {
            target.base_price = v;
        }
        if let Some(v) = self.premium_price {
            target.premium_price = v;
        }
        if let Some(v) = self.available_seats {
            target.available_seats = v;
        }
        if let Some(v) = &self.audio_format {
            target.audio_format = v.clone();
        }
        if let Some(v) = &self.video_format {
            target.video_format = v.clone();
        }
        if let Some(v) = self.is_active {
            target.is_active = v;
        }
    }

    fn is_empty(&self) -> bool {
        self.movie_id.is_none()
            && self.screen_id.is_none()
            && self.language_id.is_none()
            && self.subtitle_language_id.is_none()
            && self.show_date.is_none()
            && self.show_time.is_none()
            && self.end_time.is_none()
            && self.base_price.is_none()
            && self.premium_price.is_none()
            && self.available_seats.is_none()
            && self.audio_format.is_none()
            && self.video_format.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_only_patch_does_not_touch_schedule() {
        let patch = ScreeningPatch {
            base_price: Some(250.0),
            ..Default::default()
        };
        assert!(!patch.touches_schedule());
        assert!(!patch.is_empty());
    }

    #[test]
    fn time_or_reactivation_touches_schedule() {
        let patch = ScreeningPatch {
            end_time: NaiveTime::from_hms_opt(23, 0, 0),
            ..Default::default()
        };
        assert!(patch.touches_schedule());

        let reactivate = ScreeningPatch {
            is_active: Some(true),
            ..Default::default()
        };
        assert!(reactivate.touches_schedule());
    }
}
