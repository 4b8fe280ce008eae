//! Half-open interval overlap on a single screen and date.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_entity::screening::Screening;

/// `[start, end)` on one screen and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub screen_id: i64,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Build a slot, rejecting empty or inverted intervals. Shows that run
    /// past midnight are not representable.
    pub fn new(screen_id: i64, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::validation("End time must be after start time"));
        }
        Ok(Self {
            screen_id,
            date,
            start,
            end,
        })
    }

    pub fn of(screening: &Screening) -> Self {
        Self {
            screen_id: screening.screen_id,
            date: screening.show_date,
            start: screening.show_time,
            end: screening.end_time,
        }
    }

    /// Same screen, same date, and `a_start < b_end && b_start < a_end`.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.screen_id == other.screen_id
            && self.date == other.date
            && self.start < other.end
            && other.start < self.end
    }
}

/// The stored screening a candidate collides with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Screening conflicts with screening {screening_id} ({start}-{end}) on the same screen")]
pub struct SchedulingConflict {
    pub screening_id: i64,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl From<SchedulingConflict> for AppError {
    fn from(conflict: SchedulingConflict) -> Self {
        AppError::conflict(conflict.to_string())
    }
}

/// First active screening in `existing` whose slot overlaps `candidate`.
pub fn find_conflict(candidate: &TimeSlot, existing: &[Screening]) -> Option<SchedulingConflict> {
    existing
        .iter()
        .filter(|s| s.is_schedulable())
        .find(|s| candidate.overlaps(&TimeSlot::of(s)))
        .map(|s| SchedulingConflict {
            screening_id: s.id,
            start: s.show_time,
            end: s.end_time,
        })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn screening(id: i64, screen_id: i64, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Screening {
        Screening {
            id,
            movie_id: 1,
            screen_id,
            language_id: 1,
            subtitle_language_id: None,
            show_date: date,
            show_time: start,
            end_time: end,
            base_price: 150.0,
            premium_price: None,
            available_seats: 100,
            audio_format: None,
            video_format: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn back_to_back_shows_do_not_conflict() {
        let existing = [screening(1, 1, day(1), t(10, 0), t(12, 0))];
        let candidate = TimeSlot::new(1, day(1), t(12, 0), t(14, 0)).unwrap();
        assert_eq!(find_conflict(&candidate, &existing), None);

        let before = TimeSlot::new(1, day(1), t(8, 0), t(10, 0)).unwrap();
        assert_eq!(find_conflict(&before, &existing), None);
    }

    #[test]
    fn one_minute_overlap_conflicts() {
        let existing = [screening(7, 1, day(1), t(10, 0), t(12, 0))];
        let candidate = TimeSlot::new(1, day(1), t(11, 59), t(13, 0)).unwrap();
        let conflict = find_conflict(&candidate, &existing).unwrap();
        assert_eq!(conflict.screening_id, 7);
        assert_eq!(conflict.start, t(10, 0));

        let err = AppError::from(conflict);
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Conflict);
        assert!(err.message.contains("screening 7"));
    }

    #[test]
    fn containment_conflicts_both_ways() {
        let existing = [screening(1, 1, day(1), t(10, 0), t(14, 0))];
        let inner = TimeSlot::new(1, day(1), t(11, 0), t(12, 0)).unwrap();
        assert!(find_conflict(&inner, &existing).is_some());

        let existing = [screening(1, 1, day(1), t(11, 0), t(12, 0))];
        let outer = TimeSlot::new(1, day(1), t(10, 0), t(14, 0)).unwrap();
        assert!(find_conflict(&outer, &existing).is_some());
    }

    #[test]
    fn other_screens_and_dates_never_conflict() {
        let existing = [
            screening(1, 2, day(1), t(10, 0), t(12, 0)),
            screening(2, 1, day(2), t(10, 0), t(12, 0)),
        ];
        let candidate = TimeSlot::new(1, day(1), t(10, 0), t(12, 0)).unwrap();
        assert_eq!(find_conflict(&candidate, &existing), None);
    }

    #[test]
    fn inactive_and_deleted_screenings_are_ignored() {
        let mut inactive = screening(1, 1, day(1), t(10, 0), t(12, 0));
        inactive.is_active = false;
        let mut deleted = screening(2, 1, day(1), t(10, 0), t(12, 0));
        deleted.deleted_at = Some(Utc::now());

        let candidate = TimeSlot::new(1, day(1), t(10, 30), t(11, 30)).unwrap();
        assert_eq!(find_conflict(&candidate, &[inactive, deleted]), None);
    }

    #[test]
    fn end_must_follow_start() {
        assert!(TimeSlot::new(1, day(1), t(12, 0), t(12, 0)).is_err());
        assert!(TimeSlot::new(1, day(1), t(23, 0), t(1, 0)).is_err());
    }
}
