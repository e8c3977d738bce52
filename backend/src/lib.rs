//! Backend library: domain core, HTTP inbound adapter, and SQLite
//! persistence adapter for the users/posts listing service.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
