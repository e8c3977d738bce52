//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. The `seq`
//! column is the AUTOINCREMENT primary key and provides the natural
//! (insertion) order for every listing query; `id` is the externally
//! visible identifier and is UNIQUE, so identifiers are never reused even
//! after a row is deleted.
//!
//! Entity columns are nullable: the store tolerates malformed legacy rows,
//! and the row-to-entity mapping in [`super::models`] drops them instead of
//! failing the whole listing.

diesel::table! {
    /// Users table: directory entries with an optional postal address.
    users (seq) {
        /// AUTOINCREMENT primary key; defines insertion order.
        seq -> BigInt,
        /// External identifier: 32-hex-character UUID without dashes.
        id -> Text,
        name -> Nullable<Text>,
        email -> Nullable<Text>,
        street -> Nullable<Text>,
        city -> Nullable<Text>,
        state -> Nullable<Text>,
        zipcode -> Nullable<Text>,
    }
}

diesel::table! {
    /// Posts table: one row per post, keyed to its owning user.
    posts (seq) {
        /// AUTOINCREMENT primary key; defines insertion order.
        seq -> BigInt,
        /// External identifier: 32-hex-character UUID without dashes.
        id -> Text,
        user_id -> Nullable<Text>,
        title -> Nullable<Text>,
        body -> Nullable<Text>,
    }
}
