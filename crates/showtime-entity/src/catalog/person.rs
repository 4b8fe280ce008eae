//! People credited on movies.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

/// A person as credited on a particular movie.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CastMember {
    pub person_id: i64,
    pub name: String,
    /// `"Actor"`, `"Director"`, `"Producer"`, ...
    pub role: String,
    pub character_name: Option<String>,
}
