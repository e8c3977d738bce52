//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct that generates the OpenAPI specification
//! for the REST surface: users listing/count/detail, the posts feed
//! endpoints, and the health probes.

use utoipa::OpenApi;

use crate::domain::{Address, CreatedPost, Post, User};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::posts::{CreatePostRequest, DeleteConfirmation};
use crate::inbound::http::users::UsersCount;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users directory API",
        description = "Paginated users directory with per-user post feeds.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::count_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Address,
        Post,
        CreatedPost,
        CreatePostRequest,
        DeleteConfirmation,
        UsersCount,
        ErrorBody,
    )),
    tags(
        (name = "users", description = "Paginated users directory"),
        (name = "posts", description = "Per-user post feed"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
