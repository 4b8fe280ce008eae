//! # showtime-service
//!
//! Business logic for Showtime. Each service wraps the repositories and
//! credential stores it needs and enforces the cross-entity rules the
//! database cannot express on its own: scheduling conflicts, seat-layout
//! expansion, role protection, and session revocation.
//!
//! Services are cheap to clone and receive every dependency at
//! construction time.

pub mod auth;
pub mod bootstrap;
pub mod catalog;
pub mod layout;
pub mod role;
pub mod scheduling;
pub mod screening;
pub mod user;
pub mod venue;

pub use auth::{AuthService, LoginOutcome};
pub use bootstrap::ensure_admin;
pub use catalog::{CreateMovie, GenreService, LanguageService, MovieService, UpdateMovie};
pub use role::RoleService;
pub use scheduling::{SchedulingConflict, TimeSlot, find_conflict};
pub use screening::{CreateScreening, ScreeningService};
pub use user::{CreateUser, UpdateUser, UserService};
pub use venue::{CreateScreen, ScreenService, TheaterService, UpdateScreen};
