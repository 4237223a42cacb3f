use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// Raised only by `MemoryUserStore` when it simulates an outage.
    #[cfg(any(test, feature = "test-support"))]
    #[error("Database unavailable: {0}")]
    Unavailable(String),
}
