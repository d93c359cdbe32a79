//! # campus-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`Repository`](campus_app::ports::Repository) port once,
//!   generically, for every resource with a [`SqliteResource`] mapping
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain records and database rows
//!
//! ## Dependency rule
//! Depends on `campus-app` (for port traits) and `campus-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod repository;
mod tables;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use repository::SqliteRepository;
pub use tables::SqliteResource;
