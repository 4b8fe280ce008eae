//! Per-language movie entries (localized title, audio and subtitle tracks).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use showtime_core::traits::Patch;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MovieLanguage {
    pub id: i64,
    pub movie_id: i64,
    pub language_id: i64,
    /// Title in this language.
    pub title: String,
    pub description: Option<String>,
    pub has_audio: bool,
    pub has_subtitles: bool,
    /// e.g. `"Dolby Atmos"`, `"Stereo"`.
    pub audio_format: Option<String>,
    /// e.g. `"SRT"`, `"VTT"`.
    pub subtitle_format: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A movie-language entry joined with its language code and name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MovieLanguageDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub entry: MovieLanguage,
    pub language_code: String,
    pub language_name: String,
}

#[derive(Debug, Clone)]
pub struct NewMovieLanguage {
    pub movie_id: i64,
    pub language_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub has_audio: bool,
    pub has_subtitles: bool,
    pub audio_format: Option<String>,
    pub subtitle_format: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MovieLanguagePatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub has_audio: Option<bool>,
    pub has_subtitles: Option<bool>,
    pub audio_format: Option<Option<String>>,
    pub subtitle_format: Option<Option<String>>,
}

impl Patch<MovieLanguage> for MovieLanguagePatch {
    fn apply_to(&self, target: &mut MovieLanguage) {
        if let Some(title) = &self.title {
            target.title = title.clone();
        }
        if let Some(description) = &self.description {
            target.description = description.clone();
        }
        if let Some(audio) = self.has_audio {
            target.has_audio = audio;
        }
        if let Some(subs) = self.has_subtitles {
            target.has_subtitles = subs;
        }
        if let Some(fmt) = &self.audio_format {
            target.audio_format = fmt.clone();
        }
        if let Some(fmt) = &self.subtitle_format {
            target.subtitle_format = fmt.clone();
        }
    }

    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.has_audio.is_none()
            && self.has_subtitles.is_none()
            && self.audio_format.is_none()
            && self.subtitle_format.is_none()
    }
}
