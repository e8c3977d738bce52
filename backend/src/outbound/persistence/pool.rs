//! Connection pool for Diesel SQLite connections.
//!
//! Wraps `diesel::r2d2` to provide a pooled synchronous connection source
//! for the persistence layer. Checkout happens on the blocking thread pool;
//! repositories never hold a connection across an await point.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Shared handle to the SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Migrations compiled into the binary; applied at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors that can occur while setting up or using the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },
    /// Failed to apply embedded migrations.
    #[error("failed to run migrations: {message}")]
    Migrate { message: String },
}

impl PoolError {
    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migrate(message: impl Into<String>) -> Self {
        Self::Migrate {
            message: message.into(),
        }
    }
}

/// Sets per-connection pragmas when the pool opens a connection.
///
/// SQLite serialises writers; the busy timeout makes concurrent writers
/// queue instead of failing immediately with `SQLITE_BUSY`.
#[derive(Debug)]
struct ConnectionPragmas;

impl diesel::r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error>
    for ConnectionPragmas
{
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Configuration for the database connection pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
}

impl PoolConfig {
    /// Create a new configuration with the given database path or URL.
    ///
    /// Defaults to 10 connections.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
        }
    }

    /// Override the maximum pool size.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Build the connection pool.
    pub fn build(&self) -> Result<DbPool, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(&self.database_url);
        Pool::builder()
            .max_size(self.max_size)
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))
    }
}

/// Apply any pending embedded migrations.
pub fn run_migrations(pool: &DbPool) -> Result<(), PoolError> {
    let mut conn = pool
        .get()
        .map_err(|err| PoolError::checkout(err.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| PoolError::migrate(err.to_string()))
}
