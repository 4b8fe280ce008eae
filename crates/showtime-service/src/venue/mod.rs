//! Theaters and their screens.

pub mod screen;
pub mod theater;

pub use screen::{CreateScreen, ScreenService, UpdateScreen};
pub use theater::TheaterService;
