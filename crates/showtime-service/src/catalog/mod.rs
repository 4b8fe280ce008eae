//! Genres, languages, and movies.

pub mod genre;
pub mod language;
pub mod movie;

pub use genre::GenreService;
pub use language::LanguageService;
pub use movie::{CreateMovie, MovieService, UpdateMovie};
