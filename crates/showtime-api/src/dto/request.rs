//! Request DTOs with validation.
//!
//! Update bodies use plain `Option` fields: an absent field keeps the
//! stored value.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use showtime_entity::catalog::{
    CastEntry, LanguagePatch, MovieLanguagePatch, MoviePatch, MovieRating, NewLanguage, NewMovie,
    NewMovieLanguage,
};
use showtime_entity::screening::ScreeningPatch;
use showtime_entity::venue::{NewTheater, TheaterPatch};
use showtime_service::{
    CreateMovie, CreateScreen, CreateScreening, CreateUser, UpdateMovie, UpdateScreen, UpdateUser,
};

fn default_true() -> bool {
    true
}

// ── Auth ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

// ── Roles ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleRequest {
    #[validate(length(min = 2, max = 50, message = "must be 2 to 50 characters"))]
    pub name: String,
}

// ── Users ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 100, message = "must be 2 to 100 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    pub role_id: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            name: req.name,
            role_id: req.role_id,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 100, message = "must be 2 to 100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: Option<String>,
    pub role_id: Option<i64>,
    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            name: req.name,
            role_id: req.role_id,
            is_active: req.is_active,
        }
    }
}

// ── Genres ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenreRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1 to 50 characters"))]
    pub name: String,
}

// ── Languages ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLanguageRequest {
    #[validate(length(min = 2, max = 5, message = "must be 2 to 5 characters"))]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(max = 100))]
    pub native_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateLanguageRequest> for NewLanguage {
    fn from(req: CreateLanguageRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            native_name: req.native_name,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLanguageRequest {
    #[validate(length(min = 2, max = 5, message = "must be 2 to 5 characters"))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub native_name: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateLanguageRequest> for LanguagePatch {
    fn from(req: UpdateLanguageRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            native_name: req.native_name.map(Some),
            is_active: req.is_active,
        }
    }
}

// ── Movies ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub original_title: String,
    #[validate(range(min = 1, message = "must be at least 1 minute"))]
    pub duration_minutes: i32,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<MovieRating>,
    pub description: Option<String>,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub poster_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub cast: Vec<CastEntry>,
}

impl From<CreateMovieRequest> for CreateMovie {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            movie: NewMovie {
                original_title: req.original_title,
                duration_minutes: req.duration_minutes,
                release_date: req.release_date,
                rating: req.rating,
                description: req.description,
                poster_url: req.poster_url,
                is_active: req.is_active,
            },
            genre_ids: req.genre_ids,
            cast: req.cast,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub original_title: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1 minute"))]
    pub duration_minutes: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<MovieRating>,
    pub description: Option<String>,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub poster_url: Option<String>,
    pub is_active: Option<bool>,
    pub genre_ids: Option<Vec<i64>>,
    pub cast: Option<Vec<CastEntry>>,
}

impl From<UpdateMovieRequest> for UpdateMovie {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            patch: MoviePatch {
                original_title: req.original_title,
                duration_minutes: req.duration_minutes,
                release_date: req.release_date.map(Some),
                rating: req.rating.map(Some),
                description: req.description.map(Some),
                poster_url: req.poster_url.map(Some),
                is_active: req.is_active,
            },
            genre_ids: req.genre_ids,
            cast: req.cast,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddMovieLanguageRequest {
    pub language_id: i64,
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub has_audio: bool,
    #[serde(default)]
    pub has_subtitles: bool,
    #[validate(length(max = 50))]
    pub audio_format: Option<String>,
    #[validate(length(max = 50))]
    pub subtitle_format: Option<String>,
}

impl AddMovieLanguageRequest {
    pub fn into_new(self, movie_id: i64) -> NewMovieLanguage {
        NewMovieLanguage {
            movie_id,
            language_id: self.language_id,
            title: self.title,
            description: self.description,
            has_audio: self.has_audio,
            has_subtitles: self.has_subtitles,
            audio_format: self.audio_format,
            subtitle_format: self.subtitle_format,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMovieLanguageRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub has_audio: Option<bool>,
    pub has_subtitles: Option<bool>,
    #[validate(length(max = 50))]
    pub audio_format: Option<String>,
    #[validate(length(max = 50))]
    pub subtitle_format: Option<String>,
}

impl From<UpdateMovieLanguageRequest> for MovieLanguagePatch {
    fn from(req: UpdateMovieLanguageRequest) -> Self {
        Self {
            title: req.title,
            description: req.description.map(Some),
            has_audio: req.has_audio,
            has_subtitles: req.has_subtitles,
            audio_format: req.audio_format.map(Some),
            subtitle_format: req.subtitle_format.map(Some),
        }
    }
}

// ── Theaters ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTheaterRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: String,
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub state: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateTheaterRequest> for NewTheater {
    fn from(req: CreateTheaterRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            city: req.city,
            state: req.state,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTheaterRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub state: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateTheaterRequest> for TheaterPatch {
    fn from(req: UpdateTheaterRequest) -> Self {
        Self {
            name: req.name,
            address: req.address.map(Some),
            city: req.city.map(Some),
            state: req.state.map(Some),
            is_active: req.is_active,
        }
    }
}

// ── Screens ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateScreenRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: String,
    pub theater_id: i64,
    pub seat_layout: serde_json::Value,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateScreenRequest> for CreateScreen {
    fn from(req: CreateScreenRequest) -> Self {
        Self {
            name: req.name,
            theater_id: req.theater_id,
            seat_layout: req.seat_layout,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateScreenRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: Option<String>,
    pub seat_layout: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

impl From<UpdateScreenRequest> for UpdateScreen {
    fn from(req: UpdateScreenRequest) -> Self {
        Self {
            name: req.name,
            seat_layout: req.seat_layout,
            is_active: req.is_active,
        }
    }
}

// ── Screenings ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateScreeningRequest {
    pub movie_id: i64,
    pub screen_id: i64,
    pub language_id: i64,
    pub subtitle_language_id: Option<i64>,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub end_time: NaiveTime,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub base_price: f64,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub premium_price: Option<f64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub available_seats: Option<i32>,
    #[validate(length(max = 50))]
    pub audio_format: Option<String>,
    #[validate(length(max = 50))]
    pub video_format: Option<String>,
}

impl From<CreateScreeningRequest> for CreateScreening {
    fn from(req: CreateScreeningRequest) -> Self {
        Self {
            movie_id: req.movie_id,
            screen_id: req.screen_id,
            language_id: req.language_id,
            subtitle_language_id: req.subtitle_language_id,
            show_date: req.show_date,
            show_time: req.show_time,
            end_time: req.end_time,
            base_price: req.base_price,
            premium_price: req.premium_price,
            available_seats: req.available_seats,
            audio_format: req.audio_format,
            video_format: req.video_format,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateScreeningRequest {
    pub movie_id: Option<i64>,
    pub screen_id: Option<i64>,
    pub language_id: Option<i64>,
    pub subtitle_language_id: Option<i64>,
    pub show_date: Option<NaiveDate>,
    pub show_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub base_price: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub premium_price: Option<f64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub available_seats: Option<i32>,
    #[validate(length(max = 50))]
    pub audio_format: Option<String>,
    #[validate(length(max = 50))]
    pub video_format: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateScreeningRequest> for ScreeningPatch {
    fn from(req: UpdateScreeningRequest) -> Self {
        Self {
            movie_id: req.movie_id,
            screen_id: req.screen_id,
            language_id: req.language_id,
            subtitle_language_id: req.subtitle_language_id.map(Some),
            show_date: req.show_date,
            show_time: req.show_time,
            end_time: req.end_time,
            base_price: req.base_price,
            premium_price: req.premium_price.map(Some),
            available_seats: req.available_seats,
            audio_format: req.audio_format.map(Some),
            video_format: req.video_format.map(Some),
            is_active: req.is_active,
        }
    }
}

// ── Query strings ────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub search: Option<String>,
    pub role_id: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieQuery {
    pub search: Option<String>,
    pub genre_id: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TheaterQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenQuery {
    pub theater_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreeningQuery {
    pub movie_id: Option<i64>,
    pub language_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub theater_id: Option<i64>,
    pub screen_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_user_rules() {
        let ok: CreateUserRequest = serde_json::from_value(json!({
            "name": "Ada", "email": "ada@example.com", "password": "longenough", "role_id": 2
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
        assert!(ok.is_active);

        let bad: CreateUserRequest = serde_json::from_value(json!({
            "name": "A", "email": "nope", "password": "short", "role_id": 2
        }))
        .unwrap();
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn movie_rating_accepts_certificate_labels() {
        let req: CreateMovieRequest = serde_json::from_value(json!({
            "original_title": "Vikram", "duration_minutes": 174, "rating": "U/A"
        }))
        .unwrap();
        assert_eq!(req.rating, Some(MovieRating::UA));
        assert!(req.validate().is_ok());

        let zero: CreateMovieRequest = serde_json::from_value(json!({
            "original_title": "Short", "duration_minutes": 0
        }))
        .unwrap();
        assert!(zero.validate().is_err());

        assert!(
            serde_json::from_value::<CreateMovieRequest>(json!({
                "original_title": "X", "duration_minutes": 90, "rating": "PG"
            }))
            .is_err()
        );
    }

    #[test]
    fn update_screening_touching_times_moves_schedule() {
        let req: UpdateScreeningRequest =
            serde_json::from_value(json!({ "show_time": "18:30:00" })).unwrap();
        let patch = ScreeningPatch::from(req);
        assert!(patch.touches_schedule());

        let price_only = ScreeningPatch::from(UpdateScreeningRequest {
            base_price: Some(250.0),
            ..Default::default()
        });
        assert!(!price_only.touches_schedule());
    }
}
