//! Query-key read store.
//!
//! A page view issues two independent reads: the page of users and the
//! global count. Each read is correlated with the state it populates via a
//! [`QueryKey`], and results may arrive in either order. The store issues
//! monotonically numbered [`Ticket`]s: completing a ticket writes its slot
//! only while it is still the newest ticket for that key, so a new request
//! for a key supersedes any stale in-flight read, while requests for
//! different keys never interfere. No cancellation, no retries.

use std::collections::HashMap;

use pagination::PageRequest;

use crate::models::{Post, User};

/// Identity correlating an asynchronous read with the state it populates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// One page of the users listing.
    Users { page_number: u32, page_size: u32 },
    /// The global user count.
    UsersCount,
    /// The post feed of one user.
    Posts { user_id: String },
}

impl QueryKey {
    /// Key for the users page described by a [`PageRequest`].
    pub fn users_page(page: PageRequest) -> Self {
        Self::Users {
            page_number: page.page_number(),
            page_size: page.page_size(),
        }
    }
}

/// Loading state of one query slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Never requested.
    Idle,
    /// A read is in flight and no result has landed yet.
    Loading,
    /// The most recent read succeeded.
    Ready(T),
    /// The most recent read failed; the message is client-facing.
    Failed(String),
}

impl<T> Loadable<T> {
    /// The ready value, if any.
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Whether a read is currently in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Successful payload for a query slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// Payload of a [`QueryKey::Users`] read.
    Users(Vec<User>),
    /// Payload of a [`QueryKey::UsersCount`] read.
    Count(u64),
    /// Payload of a [`QueryKey::Posts`] read.
    Posts(Vec<Post>),
}

/// Correlation handle for one issued read.
///
/// Holds the key it was issued for and its sequence number; the store only
/// honours the newest ticket per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: QueryKey,
    seq: u64,
}

#[derive(Debug)]
struct Slot {
    latest: u64,
    state: Loadable<QueryResult>,
}

/// Read store for the listing page views.
#[derive(Debug, Default)]
pub struct ListStore {
    slots: HashMap<QueryKey, Slot>,
    next_seq: u64,
}

impl ListStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a read of `key` and mark its slot loading.
    ///
    /// Any ticket previously issued for the same key becomes stale.
    pub fn begin(&mut self, key: QueryKey) -> Ticket {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.slots.insert(
            key.clone(),
            Slot {
                latest: seq,
                state: Loadable::Loading,
            },
        );
        Ticket { key, seq }
    }

    /// Complete a read, writing the slot only if the ticket is still the
    /// newest issued for its key. Returns whether the slot was written.
    pub fn complete(&mut self, ticket: Ticket, result: Result<QueryResult, String>) -> bool {
        match self.slots.get_mut(&ticket.key) {
            Some(slot) if slot.latest == ticket.seq => {
                slot.state = match result {
                    Ok(value) => Loadable::Ready(value),
                    Err(message) => Loadable::Failed(message),
                };
                true
            }
            _ => false,
        }
    }

    /// Current state of a key's slot; never-requested keys are idle.
    pub fn state(&self, key: &QueryKey) -> &Loadable<QueryResult> {
        static IDLE: Loadable<QueryResult> = Loadable::Idle;
        self.slots.get(key).map_or(&IDLE, |slot| &slot.state)
    }

    /// The ready users of a page slot, if that read has landed.
    pub fn users(&self, page: PageRequest) -> Option<&[User]> {
        match self.state(&QueryKey::users_page(page)).ready() {
            Some(QueryResult::Users(users)) => Some(users),
            _ => None,
        }
    }

    /// The ready global count, if that read has landed.
    pub fn count(&self) -> Option<u64> {
        match self.state(&QueryKey::UsersCount).ready() {
            Some(QueryResult::Count(count)) => Some(*count),
            _ => None,
        }
    }

    /// The ready post feed of a user, if that read has landed.
    pub fn posts(&self, user_id: &str) -> Option<&[Post]> {
        let key = QueryKey::Posts {
            user_id: user_id.to_owned(),
        };
        match self.state(&key).ready() {
            Some(QueryResult::Posts(posts)) => Some(posts),
            _ => None,
        }
    }

    /// Total pages derived from the count slot, recomputed on access so it
    /// tracks the count as soon as that read lands.
    pub fn total_pages(&self, page: PageRequest) -> Option<u64> {
        self.count().map(|count| page.total_pages(count))
    }
}
