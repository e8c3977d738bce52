//! Domain core: entities, paging contract, ports, and transport-agnostic
//! errors.
//!
//! Nothing in this module knows about HTTP or SQL. Inbound adapters map
//! [`Error`] values to wire responses; outbound adapters implement the
//! traits in [`ports`].

pub mod error;
pub mod ports;
pub mod post;
pub mod user;

pub use error::{Error, ErrorCode};
pub use post::{CreatedPost, NewPost, NewPostValidationError, Post};
pub use user::{Address, User};
