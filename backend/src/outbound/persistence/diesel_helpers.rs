//! Shared helpers for the Diesel repositories.

use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use tokio::task;

use crate::domain::ports::StorageError;

use super::pool::DbPool;

pub(crate) type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Check out a connection, mapping pool failures to [`StorageError`].
pub(crate) fn checkout(pool: &DbPool) -> Result<Conn, StorageError> {
    pool.get()
        .map_err(|err| StorageError::connection(err.to_string()))
}

/// Map a Diesel query failure to [`StorageError`].
pub(crate) fn map_query_error(err: diesel::result::Error) -> StorageError {
    StorageError::query(err.to_string())
}

/// Map a blocking-task join failure to [`StorageError`].
pub(crate) fn map_join_error(err: task::JoinError) -> StorageError {
    StorageError::query(format!("blocking task failed: {err}"))
}
