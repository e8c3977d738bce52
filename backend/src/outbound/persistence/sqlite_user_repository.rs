//! Diesel-backed [`UserRepository`] adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use pagination::PageRequest;
use tokio::task;

use crate::domain::User;
use crate::domain::ports::{StorageError, UserRepository};

use super::diesel_helpers::{checkout, map_join_error, map_query_error};
use super::models::UserRow;
use super::pool::DbPool;
use super::schema::users;

/// Reads user rows from SQLite, applying the lenient row-to-entity filter.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, StorageError> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut conn = checkout(&pool)?;
            let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
            let rows = users::table
                .order(users::seq.asc())
                .offset(offset)
                .limit(i64::from(page.limit()))
                .select(UserRow::as_select())
                .load::<UserRow>(&mut conn)
                .map_err(map_query_error)?;
            Ok(rows.into_iter().filter_map(UserRow::into_user).collect())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut conn = checkout(&pool)?;
            let total: i64 = users::table
                .count()
                .get_result(&mut conn)
                .map_err(map_query_error)?;
            Ok(u64::try_from(total).unwrap_or_default())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StorageError> {
        let pool = self.pool.clone();
        let id = id.to_owned();
        task::spawn_blocking(move || {
            let mut conn = checkout(&pool)?;
            let row = users::table
                .filter(users::id.eq(&id))
                .select(UserRow::as_select())
                .first::<UserRow>(&mut conn)
                .optional()
                .map_err(map_query_error)?;
            Ok(row.and_then(UserRow::into_user))
        })
        .await
        .map_err(map_join_error)?
    }
}
