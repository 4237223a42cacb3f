use crate::{DbError, UserStore};
use async_trait::async_trait;
use core_types::{NewUser, Outcome, User, UserId};
use sqlx::postgres::PgPool;

/// The PostgreSQL-backed `UserStore`.
///
/// Each operation acquires its own connection from the pool. The
/// `PoolConnection` guard returns it to the pool when it goes out of scope,
/// which also covers the `?` early returns on statement failure.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Creates a new `PgUserStore` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let mut conn = self.pool.acquire().await?;
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM usuarios")
            .fetch_all(&mut *conn)
            .await?;
        tracing::debug!(count = users.len(), "Listed users.");
        Ok(users)
    }

    #[tracing::instrument(skip(self, user))]
    async fn create(&self, user: NewUser) -> Result<User, DbError> {
        let mut conn = self.pool.acquire().await?;
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO usuarios (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&mut *conn)
        .await?;
        tracing::info!(id = created.id, "User created.");
        Ok(created)
    }

    #[tracing::instrument(skip(self, user))]
    async fn update(&self, id: UserId, user: NewUser) -> Result<Outcome<User>, DbError> {
        let mut conn = self.pool.acquire().await?;
        let updated = sqlx::query_as::<_, User>(
            "UPDATE usuarios SET name = $1, email = $2 WHERE id = $3 RETURNING id, name, email",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        let outcome = Outcome::from_option(updated);
        tracing::debug!(found = outcome.is_found(), "Update executed.");
        Ok(outcome)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: UserId) -> Result<Outcome<()>, DbError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        let outcome = Outcome::from_rows_affected(result.rows_affected());
        tracing::debug!(found = outcome.is_found(), "Delete executed.");
        Ok(outcome)
    }
}
