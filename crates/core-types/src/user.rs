use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database identifier of a user (`SERIAL` column).
pub type UserId = i32;

/// A row of the `usuarios` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Assigned by the database on insert and never changed afterwards.
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// The client-supplied part of a user, used for both create and full-replace
/// update. It has no `id`: the persistence layer owns that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Combines this candidate with an assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
