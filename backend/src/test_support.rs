//! Test utilities for the backend crate.
//!
//! Shared helpers for unit tests (in `src/`) and integration tests (in
//! `tests/`). Only compiled when the `test-support` feature is enabled;
//! the dev-dependency on the crate itself turns it on for the test build.

use diesel::prelude::*;

use crate::outbound::persistence::{
    DbPool, NewPostRow, NewUserRow, PoolConfig, posts, run_migrations, users,
};

/// A migrated SQLite database on a temp file, dropped with the value.
///
/// A file-backed database is used rather than `:memory:` because each
/// pooled connection to `:memory:` would see its own private database.
pub struct TestDb {
    pool: DbPool,
    _file: tempfile::NamedTempFile,
}

impl TestDb {
    /// Create a fresh database and apply the embedded migrations.
    ///
    /// # Panics
    /// Panics on any setup failure; tests cannot proceed without storage.
    pub fn new() -> Self {
        let file = tempfile::NamedTempFile::new().expect("create temp database file");
        let path = file.path().to_string_lossy().into_owned();
        let pool = PoolConfig::new(path)
            .with_max_size(2)
            .build()
            .expect("build test pool");
        run_migrations(&pool).expect("apply migrations");
        Self { pool, _file: file }
    }

    /// Handle to the underlying pool.
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional address components used when seeding a user.
pub type SeedAddress<'a> = (&'a str, &'a str, &'a str, &'a str);

/// Insert a well-formed user row.
///
/// # Panics
/// Panics when the insert fails.
pub fn seed_user(pool: &DbPool, id: &str, name: &str, email: &str, address: Option<SeedAddress>) {
    let mut conn = pool.get().expect("checkout seeding connection");
    let (street, city, state, zipcode) = match address {
        Some((street, city, state, zipcode)) => {
            (Some(street), Some(city), Some(state), Some(zipcode))
        }
        None => (None, None, None, None),
    };
    diesel::insert_into(users::table)
        .values(NewUserRow {
            id,
            name: Some(name),
            email: Some(email),
            street,
            city,
            state,
            zipcode,
        })
        .execute(&mut conn)
        .expect("seed user row");
}

/// Insert a malformed user row with NULL name and email; the lenient
/// mapper must drop it from listings.
///
/// # Panics
/// Panics when the insert fails.
pub fn seed_malformed_user(pool: &DbPool, id: &str) {
    let mut conn = pool.get().expect("checkout seeding connection");
    diesel::insert_into(users::table)
        .values(NewUserRow {
            id,
            name: None,
            email: None,
            street: None,
            city: None,
            state: None,
            zipcode: None,
        })
        .execute(&mut conn)
        .expect("seed malformed user row");
}

/// Insert a well-formed post row.
///
/// # Panics
/// Panics when the insert fails.
pub fn seed_post(pool: &DbPool, id: &str, user_id: &str, title: &str, body: &str) {
    let mut conn = pool.get().expect("checkout seeding connection");
    diesel::insert_into(posts::table)
        .values(NewPostRow {
            id,
            user_id: Some(user_id),
            title: Some(title),
            body: Some(body),
        })
        .execute(&mut conn)
        .expect("seed post row");
}

/// Insert a malformed post row (NULL title and body) for a user; the
/// lenient mapper must drop it from listings.
///
/// # Panics
/// Panics when the insert fails.
pub fn seed_malformed_post(pool: &DbPool, id: &str, user_id: &str) {
    let mut conn = pool.get().expect("checkout seeding connection");
    diesel::insert_into(posts::table)
        .values(NewPostRow {
            id,
            user_id: Some(user_id),
            title: None,
            body: None,
        })
        .execute(&mut conn)
        .expect("seed malformed post row");
}
