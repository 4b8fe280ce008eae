//! Movie catalog: genres, people, languages, movies, and localized entries.

pub mod genre;
pub mod language;
pub mod movie;
pub mod movie_language;
pub mod person;
pub mod rating;

pub use genre::Genre;
pub use language::{Language, LanguagePatch, NewLanguage};
pub use movie::{CastEntry, Movie, MovieDetails, MoviePatch, NewMovie};
pub use movie_language::{MovieLanguage, MovieLanguageDetail, MovieLanguagePatch, NewMovieLanguage};
pub use person::{CastMember, Person};
pub use rating::MovieRating;
