//! Client side of the users/posts service: a typed HTTP client for the
//! REST surface, the URL-driven paging state, and the query-key read store
//! that tolerates out-of-order response arrival.
//!
//! The navigable URL, not component-local memory, is the source of truth
//! for the current page: [`page_state::PageQuery`] parses it and rewrites
//! it, so back/forward navigation and shared links reproduce the same
//! page. [`store::ListStore`] holds the results of the two concurrent
//! reads a page view issues (entities and count), keyed so a stale
//! in-flight read can never overwrite a newer one.

pub mod api;
pub mod models;
pub mod page_state;
pub mod store;

pub use api::{ApiClient, ClientError};
pub use page_state::PageQuery;
pub use store::{ListStore, Loadable, QueryKey, QueryResult, Ticket};
