//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod posts;
pub mod routes;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};
