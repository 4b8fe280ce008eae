//! PostgreSQL repositories for every Showtime entity.

pub mod genre;
pub mod language;
pub mod movie;
pub mod role;
pub mod screen;
pub mod screening;
pub mod theater;
pub mod user;

pub use genre::GenreRepository;
pub use language::LanguageRepository;
pub use movie::{MovieFilter, MovieRepository};
pub use role::RoleRepository;
pub use screen::ScreenRepository;
pub use screening::{ScreeningFilter, ScreeningRepository};
pub use theater::{TheaterFilter, TheaterRepository};
pub use user::UserRepository;
