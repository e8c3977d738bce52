//! Diesel-backed [`PostRepository`] adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::domain::ports::{PostRepository, StorageError};
use crate::domain::{CreatedPost, NewPost, Post};

use super::diesel_helpers::{checkout, map_join_error, map_query_error};
use super::models::{NewPostRow, PostRow};
use super::pool::DbPool;
use super::schema::posts;

/// Generate a fresh post identifier: a lowercase UUID v4 without dashes,
/// matching the format of identifiers already in the store.
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Reads and mutates post rows in SQLite.
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: DbPool,
}

impl SqlitePostRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Post>, StorageError> {
        let pool = self.pool.clone();
        let user_id = user_id.to_owned();
        task::spawn_blocking(move || {
            let mut conn = checkout(&pool)?;
            let rows = posts::table
                .filter(posts::user_id.eq(&user_id))
                .order(posts::seq.asc())
                .select(PostRow::as_select())
                .load::<PostRow>(&mut conn)
                .map_err(map_query_error)?;
            Ok(rows.into_iter().filter_map(PostRow::into_post).collect())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create(&self, post: NewPost) -> Result<CreatedPost, StorageError> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut conn = checkout(&pool)?;
            let id = generate_id();
            diesel::insert_into(posts::table)
                .values(NewPostRow {
                    id: &id,
                    user_id: Some(post.user_id()),
                    title: Some(post.title()),
                    body: Some(post.body()),
                })
                .execute(&mut conn)
                .map_err(map_query_error)?;
            Ok(CreatedPost { id })
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let pool = self.pool.clone();
        let id = id.to_owned();
        task::spawn_blocking(move || {
            let mut conn = checkout(&pool)?;
            // Zero rows affected is fine: delete is idempotent by contract.
            diesel::delete(posts::table.filter(posts::id.eq(&id)))
                .execute(&mut conn)
                .map_err(map_query_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}
