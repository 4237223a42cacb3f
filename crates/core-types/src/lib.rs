//! # Usuarios Core Types
//!
//! The shared vocabulary of the workspace: the `User` entity as it is stored,
//! the `NewUser` candidate accepted by create and update, and the `Outcome`
//! tag used by operations that target a single id.
//!
//! This crate depends on nothing else in the workspace.

pub mod outcome;
pub mod user;

// Re-export the core types to provide a clean public API.
pub use outcome::Outcome;
pub use user::{NewUser, User, UserId};
