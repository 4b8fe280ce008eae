//! Movie entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use showtime_core::traits::Patch;

use super::genre::Genre;
use super::movie_language::MovieLanguageDetail;
use super::person::CastMember;
use super::rating::MovieRating;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub original_title: String,
    pub duration_minutes: i32,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<MovieRating>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A credit to attach to a movie on create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastEntry {
    pub person_id: i64,
    pub role: String,
    pub character_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMovie {
    pub original_title: String,
    pub duration_minutes: i32,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<MovieRating>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub original_title: Option<String>,
    pub duration_minutes: Option<i32>,
    pub release_date: Option<Option<NaiveDate>>,
    pub rating: Option<Option<MovieRating>>,
    pub description: Option<Option<String>>,
    pub poster_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Patch<Movie> for MoviePatch {
    fn apply_to(&self, target: &mut Movie) {
        if let Some(title) = &self.original_title {
            target.original_title = title.clone();
        }
        if let Some(duration) = self.duration_minutes {
            target.duration_minutes = duration;
        }
        if let Some(date) = self.release_date {
            target.release_date = date;
        }
        if let Some(rating) = self.rating {
            target.rating = rating;
        }
        if let Some(description) = &self.description {
            target.description = description.clone();
        }
        if let Some(url) = &self.poster_url {
            target.poster_url = url.clone();
        }
        if let Some(active) = self.is_active {
            target.is_active = active;
        }
    }

    fn is_empty(&self) -> bool {
        self.original_title.is_none()
            && self.duration_minutes.is_none()
            && self.release_date.is_none()
            && self.rating.is_none()
            && self.description.is_none()
            && self.poster_url.is_none()
            && self.is_active.is_none()
    }
}

/// A movie with its genres, credits, and language entries.
///
/// `title` is the display title: the original title unless a localized
/// entry was applied with [`MovieDetails::localize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    pub title: String,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    pub languages: Vec<MovieLanguageDetail>,
}

impl MovieDetails {
    pub fn new(
        movie: Movie,
        genres: Vec<Genre>,
        cast: Vec<CastMember>,
        languages: Vec<MovieLanguageDetail>,
    ) -> Self {
        let title = movie.original_title.clone();
        Self {
            movie,
            title,
            genres,
            cast,
            languages,
        }
    }

    /// Overlay the title and description of the entry whose language code
    /// matches `code` (case-insensitive). Returns `false` when no entry matches.
    pub fn localize(&mut self, code: &str) -> bool {
        let Some(entry) = self
            .languages
            .iter()
            .find(|l| l.language_code.eq_ignore_ascii_case(code))
        else {
            return false;
        };
        self.title = entry.entry.title.clone();
        if entry.entry.description.is_some() {
            self.movie.description = entry.entry.description.clone();
        }
        true
    }
}
