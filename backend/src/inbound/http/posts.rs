//! Posts API handlers.
//!
//! ```text
//! GET    /posts?userId=<id>
//! POST   /posts {"title":"T","body":"B","userId":"U"}
//! DELETE /posts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::StorageError;
use crate::domain::{CreatedPost, Error, NewPost, Post};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Query parameters for listing a user's posts.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsParams {
    pub user_id: Option<String>,
}

/// Request body for creating a post.
///
/// Fields default to empty strings so an omitted field reaches validation
/// instead of failing JSON deserialization with an opaque 400.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub user_id: String,
}

/// Confirmation envelope for deletions.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    /// Human-readable confirmation.
    pub message: String,
}

fn storage_failure(context: &'static str, message: &'static str, err: &StorageError) -> Error {
    error!(error = %err, context, "storage failure");
    Error::internal(message)
}

/// List all posts owned by a user, in insertion order.
#[utoipa::path(
    get,
    path = "/posts",
    params(("userId" = String, Query, description = "Identifier of the owning user")),
    responses(
        (status = 200, description = "The user's posts", body = [Post]),
        (status = 400, description = "userId missing", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    query: web::Query<ListPostsParams>,
) -> ApiResult<web::Json<Vec<Post>>> {
    let user_id = match query.user_id.as_deref() {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(Error::invalid_request("userId is required").into()),
    };
    let posts = state
        .posts
        .list_for_user(user_id)
        .await
        .map_err(|err| storage_failure("listing posts", "Internal server error", &err))?;
    Ok(web::Json(posts))
}

/// Create a post for a user.
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = CreatedPost),
        (status = 400, description = "Required fields missing", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let new_post = NewPost::try_from_parts(request.title, request.body, request.user_id)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let created = state
        .posts
        .create(new_post)
        .await
        .map_err(|err| storage_failure("creating post", "Failed to create post", &err))?;
    Ok(HttpResponse::Created().json(created))
}

/// Delete a post by id.
///
/// Deleting an id that does not exist still returns 200: the delete is
/// idempotent and the absence of the row is the requested outcome.
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted", body = DeleteConfirmation),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["posts"],
    operation_id = "deletePost"
)]
#[delete("/posts/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<DeleteConfirmation>> {
    state
        .posts
        .delete(&id)
        .await
        .map_err(|err| storage_failure("deleting post", "Failed to delete post", &err))?;
    Ok(web::Json(DeleteConfirmation {
        message: "Post deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    //! Handler coverage over stub repositories: validation short-circuits
    //! before storage, and storage failures map to the generic envelope.

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use async_trait::async_trait;
    use pagination::PageRequest;

    use super::*;
    use crate::domain::User;
    use crate::domain::ports::{PostRepository, UserRepository};

    #[derive(Default)]
    struct StubPostRepository {
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubPostRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn storage_result<T>(&self, value: T) -> Result<T, StorageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StorageError::query("simulated failure"));
            }
            Ok(value)
        }
    }

    #[async_trait]
    impl PostRepository for StubPostRepository {
        async fn list_for_user(&self, _user_id: &str) -> Result<Vec<Post>, StorageError> {
            self.storage_result(Vec::new())
        }

        async fn create(&self, _post: NewPost) -> Result<CreatedPost, StorageError> {
            self.storage_result(CreatedPost { id: "fresh".into() })
        }

        async fn delete(&self, _id: &str) -> Result<(), StorageError> {
            self.storage_result(())
        }
    }

    struct UnusedUserRepository;

    #[async_trait]
    impl UserRepository for UnusedUserRepository {
        async fn list(&self, _page: PageRequest) -> Result<Vec<User>, StorageError> {
            Err(StorageError::query("users should not be touched"))
        }

        async fn count(&self) -> Result<u64, StorageError> {
            Err(StorageError::query("users should not be touched"))
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<User>, StorageError> {
            Err(StorageError::query("users should not be touched"))
        }
    }

    fn state_with(posts: Arc<StubPostRepository>) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(UnusedUserRepository), posts))
    }

    #[actix_web::test]
    async fn list_posts_without_user_id_is_rejected_before_storage() {
        let posts = Arc::new(StubPostRepository::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(posts.clone()))
                .service(list_posts),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/posts").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "userId is required");
        assert_eq!(posts.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn create_post_with_missing_field_is_rejected_before_storage() {
        let posts = Arc::new(StubPostRepository::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(posts.clone()))
                .service(create_post),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/posts")
                .set_json(serde_json::json!({"title": "T", "body": "B"}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "title, body, and userId are required");
        assert_eq!(posts.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn create_post_storage_failure_maps_to_generic_500() {
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(Arc::new(StubPostRepository::failing())))
                .service(create_post),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/posts")
                .set_json(serde_json::json!({"title": "T", "body": "B", "userId": "U"}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "Failed to create post");
    }

    #[actix_web::test]
    async fn delete_post_storage_failure_maps_to_generic_500() {
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(Arc::new(StubPostRepository::failing())))
                .service(delete_post),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/posts/p1")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "Failed to delete post");
    }
}
