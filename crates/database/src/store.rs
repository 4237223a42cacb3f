use crate::DbError;
use async_trait::async_trait;
use core_types::{NewUser, Outcome, User, UserId};

/// Persistence operations on the `usuarios` table.
///
/// Every method maps to exactly one SQL statement. Implementations must not
/// hold on to a connection after the method returns.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, in the storage's natural order.
    async fn list(&self) -> Result<Vec<User>, DbError>;

    /// Inserts a new row and returns it with the assigned id.
    async fn create(&self, user: NewUser) -> Result<User, DbError>;

    /// Replaces `name` and `email` of the row with `id`.
    async fn update(&self, id: UserId, user: NewUser) -> Result<Outcome<User>, DbError>;

    /// Removes the row with `id`.
    async fn delete(&self, id: UserId) -> Result<Outcome<()>, DbError>;
}
