//! Route registration shared by the server and the integration tests.

use actix_web::web;

use super::{health, posts, users};

/// Register every REST endpoint on the given service config.
///
/// `/users/count` must be registered before `/users/{id}` so the literal
/// segment wins over the path parameter.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::count_users)
        .service(users::list_users)
        .service(users::get_user)
        .service(posts::list_posts)
        .service(posts::create_post)
        .service(posts::delete_post)
        .service(health::ready)
        .service(health::live);
}
