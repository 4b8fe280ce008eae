//! # showtime-database
//!
//! PostgreSQL connection management, embedded migrations, the credential
//! store traits, and concrete repositories for every Showtime entity.

pub mod connection;
pub(crate) mod error;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryCredentialStore;
pub use store::{RoleStore, UserFilter, UserStore};
