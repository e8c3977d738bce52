//! User entity exposed by the REST surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Postal address nested inside a [`User`].
///
/// Components that were absent in the stored row are carried as empty
/// strings, matching the external JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// A user record in its externally consumed shape.
///
/// `id` is assigned at creation and immutable; it is never reused after
/// deletion. The address is optional: legacy rows may carry no address at
/// all, in which case the JSON field is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = "dc3fcaf9ad2e4bd5b1e3f9d1b4a6c7d8")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub address: Option<Address>,
}
