//! Theaters, screens, seats, and the declarative seat layout.

pub mod layout;
pub mod screen;
pub mod seat;
pub mod theater;

pub use layout::{SeatLayoutConfig, SeatPosition, SeatTypeConfig};
pub use screen::{NewScreen, Screen, ScreenWithSeats};
pub use seat::{NewSeat, Seat, SeatStatus};
pub use theater::{NewTheater, Theater, TheaterPatch, TheaterWithScreens};
