//! # Postbox Infrastructure
//!
//! Concrete implementations of the ports defined in `postbox-core`.
//! Two storage backends fulfill the same `PostRepository` contract:
//! a relational table (SeaORM/PostgreSQL) and an in-memory list.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage backend via SeaORM
//! - `minimal` - in-memory storage only, no external dependencies

pub mod database;
pub mod memory;

pub use memory::MemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DatabaseConnections, PostgresPostRepository};
