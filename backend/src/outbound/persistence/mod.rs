//! SQLite persistence adapter built on Diesel.
//!
//! Repositories run Diesel's synchronous driver on the blocking thread pool
//! and hand out domain entities; row structs and the table DSL never leave
//! this module.

mod diesel_helpers;
mod models;
mod pool;
mod schema;
mod sqlite_post_repository;
mod sqlite_user_repository;

pub use pool::{DbPool, PoolConfig, PoolError, run_migrations};
pub use sqlite_post_repository::SqlitePostRepository;
pub use sqlite_user_repository::SqliteUserRepository;

#[cfg(feature = "test-support")]
pub(crate) use models::{NewPostRow, NewUserRow};
#[cfg(feature = "test-support")]
pub(crate) use schema::{posts, users};
