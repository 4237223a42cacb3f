//! # Usuarios Database Crate
//!
//! The persistence adapter for the `usuarios` table.
//!
//! - `connect` / `run_migrations`: build the `PgPool` from settings and apply
//!   the embedded schema.
//! - `UserStore`: the seam the HTTP layer depends on. One method per SQL
//!   statement; results are values (`Outcome`, `DbError`), never panics.
//! - `PgUserStore`: the PostgreSQL implementation. All user-supplied values
//!   are bound parameters.
//! - `MemoryUserStore` (feature `test-support`): an in-memory double.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryUserStore;
pub use repository::PgUserStore;
pub use store::UserStore;
