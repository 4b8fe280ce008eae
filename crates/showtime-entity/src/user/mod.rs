//! User and role entities.

pub mod model;
pub mod role;

pub use model::{NewUser, User, UserPatch, UserWithRole};
pub use role::{ADMIN_ROLE, Role};
