//! # Inkwell Infrastructure
//!
//! Concrete implementations of the ports defined in `inkwell-core`.
//! This crate contains the database and token-signing integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external database, in-memory repositories only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod auth;
pub mod database;

pub use auth::{JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::DbHandle;
