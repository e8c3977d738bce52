//! Users API handlers.
//!
//! ```text
//! GET /users?pageNumber=0&pageSize=4
//! GET /users/count
//! GET /users/{id}
//! ```

use actix_web::{get, web};
use pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::StorageError;
use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// 400 message for out-of-range paging parameters; byte-exact contract.
pub const INVALID_PAGE_MESSAGE: &str = "Invalid page number or page size";

/// Raw paging parameters as received on the wire.
///
/// Both arrive as optional strings so presence can be checked explicitly
/// instead of relying on numeric truthiness.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

/// Resolve raw paging parameters into a validated [`PageRequest`].
///
/// Defaulting contract:
/// - `pageNumber` absent or unparsable → `0`.
/// - `pageSize` absent, unparsable, or explicitly `0` → `4`. Substituting
///   the default for an explicit `0` is a deliberately preserved quirk of
///   the original surface, not an accident of parsing.
///
/// A parsed negative value for either parameter is rejected with the exact
/// message [`INVALID_PAGE_MESSAGE`], before any storage access.
pub fn resolve_page(params: &ListUsersParams) -> Result<PageRequest, Error> {
    let page_number = match params.page_number.as_deref() {
        None => 0,
        Some(raw) => raw.parse::<i64>().unwrap_or(0),
    };
    let page_size = match params.page_size.as_deref().map(str::parse::<i64>) {
        None | Some(Err(_)) | Some(Ok(0)) => i64::from(DEFAULT_PAGE_SIZE),
        Some(Ok(parsed)) => parsed,
    };

    if page_number < 0 || page_size < 1 {
        return Err(Error::invalid_request(INVALID_PAGE_MESSAGE));
    }

    let page_number =
        u32::try_from(page_number).map_err(|_| Error::invalid_request(INVALID_PAGE_MESSAGE))?;
    let page_size =
        u32::try_from(page_size).map_err(|_| Error::invalid_request(INVALID_PAGE_MESSAGE))?;
    PageRequest::new(page_number, page_size)
        .map_err(|_| Error::invalid_request(INVALID_PAGE_MESSAGE))
}

fn storage_failure(context: &'static str, err: &StorageError) -> Error {
    error!(error = %err, context, "storage failure");
    Error::internal("Internal server error")
}

/// List one page of users in insertion order.
#[utoipa::path(
    get,
    path = "/users",
    params(
        ("pageNumber" = Option<String>, Query, description = "Zero-based page number; defaults to 0"),
        ("pageSize" = Option<String>, Query, description = "Rows per page; defaults to 4, an explicit 0 also yields 4")
    ),
    responses(
        (status = 200, description = "One page of users", body = [User]),
        (status = 400, description = "Invalid page number or page size", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersParams>,
) -> ApiResult<web::Json<Vec<User>>> {
    let page = resolve_page(&query)?;
    let users = state
        .users
        .list(page)
        .await
        .map_err(|err| storage_failure("listing users", &err))?;
    Ok(web::Json(users))
}

/// Total user count, for page-count derivation on the client.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersCount {
    /// Total number of user rows, unfiltered.
    pub count: u64,
}

/// Report the total number of users.
#[utoipa::path(
    get,
    path = "/users/count",
    responses(
        (status = 200, description = "Total user count", body = UsersCount),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "countUsers"
)]
#[get("/users/count")]
pub async fn count_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersCount>> {
    let count = state
        .users
        .count()
        .await
        .map_err(|err| storage_failure("counting users", &err))?;
    Ok(web::Json(UsersCount { count }))
}

/// Fetch a single user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users
        .find_by_id(&id)
        .await
        .map_err(|err| storage_failure("fetching user", &err))?;
    match user {
        Some(found) => Ok(web::Json(found)),
        None => Err(Error::not_found("User not found").into()),
    }
}
