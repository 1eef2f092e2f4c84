//! # filialen-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `filialen-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `filialen-app` (for port traits) and `filialen-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod filiaal_repo;
mod pool;

pub use error::StorageError;
pub use filiaal_repo::SqliteFiliaalRepository;
pub use pool::{Config, Database};
