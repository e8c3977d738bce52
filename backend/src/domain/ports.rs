//! Domain ports for driven adapters.
//!
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of bubbling driver errors upward.

use async_trait::async_trait;
use pagination::PageRequest;
use thiserror::Error;

use super::{CreatedPost, NewPost, Post, User};

/// Errors surfaced by storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The underlying store is unreachable (pool checkout, connect failure).
    #[error("storage connection failed: {message}")]
    Connection { message: String },
    /// The query was malformed or failed mid-execution.
    #[error("storage query failed: {message}")]
    Query { message: String },
}

impl StorageError {
    /// Helper for connection-related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Read access to the users table.
///
/// Listing is bounded by a [`PageRequest`]; rows come back in insertion
/// order. Rows failing required-field validation (missing name or email)
/// are dropped by the adapter rather than surfaced as errors, so malformed
/// legacy rows never break listing.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch one page of users in insertion order.
    ///
    /// Returns at most `page.limit()` users drawn from row positions
    /// `[page.offset(), page.offset() + page.limit())`.
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, StorageError>;

    /// Total number of user rows, unfiltered.
    ///
    /// Counts raw rows, including rows the lenient mapper would drop from
    /// a listing.
    async fn count(&self) -> Result<u64, StorageError>;

    /// Point lookup by id. Absent is `Ok(None)`, not an error; a row that
    /// fails required-field validation is also reported absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StorageError>;
}

/// Read/write access to the posts table.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts owned by `user_id`, in insertion order. Rows failing
    /// required-field validation are dropped.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Post>, StorageError>;

    /// Persist a new post, assigning a fresh identifier.
    async fn create(&self, post: NewPost) -> Result<CreatedPost, StorageError>;

    /// Delete a post by id. Deleting an id that does not exist succeeds.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}
