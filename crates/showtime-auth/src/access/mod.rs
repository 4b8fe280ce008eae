//! Per-request access control: bearer extraction, session validation,
//! identity resolution, role gate, and session extension.

pub mod bearer;
pub mod gate;
pub mod identity;

pub use bearer::bearer_token;
pub use gate::AccessGate;
pub use identity::{AccessLevel, Identity};
