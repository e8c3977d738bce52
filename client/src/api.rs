//! Typed HTTP client for the users/posts REST surface.
//!
//! Every endpoint returns JSON; failures carry a `{"message": ...}` body
//! which is surfaced as [`ClientError::Api`] with the response status. A
//! failure body that does not decode falls back to the status reason
//! phrase so the caller always gets a displayable message.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use pagination::PageRequest;

use crate::models::{
    CreatePost, CreatedPost, DeleteConfirmation, ErrorBody, Post, User, UsersCount,
};

/// Failures raised by [`ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response, or the body failed to decode.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("{message} (status {status})")]
    Api {
        /// HTTP status of the rejected request.
        status: StatusCode,
        /// Client-facing message from the error body.
        message: String,
    },
    /// An endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

/// HTTP client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Bind a client to the service at `base`.
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    fn users_url(&self, page: PageRequest) -> Result<Url, ClientError> {
        let mut url = self.base.join("users")?;
        url.query_pairs_mut()
            .append_pair("pageNumber", &page.page_number().to_string())
            .append_pair("pageSize", &page.page_size().to_string());
        Ok(url)
    }

    fn users_count_url(&self) -> Result<Url, ClientError> {
        Ok(self.base.join("users/count")?)
    }

    fn user_url(&self, id: &str) -> Result<Url, ClientError> {
        Ok(self.base.join("users/")?.join(id)?)
    }

    fn posts_url(&self, user_id: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base.join("posts")?;
        if let Some(user_id) = user_id {
            url.query_pairs_mut().append_pair("userId", user_id);
        }
        Ok(url)
    }

    fn post_url(&self, id: &str) -> Result<Url, ClientError> {
        Ok(self.base.join("posts/")?.join(id)?)
    }

    /// Fetch one page of the users listing, in insertion order.
    pub async fn list_users(&self, page: PageRequest) -> Result<Vec<User>, ClientError> {
        let response = self.http.get(self.users_url(page)?).send().await?;
        decode(response).await
    }

    /// Fetch the global user count.
    pub async fn users_count(&self) -> Result<u64, ClientError> {
        let response = self.http.get(self.users_count_url()?).send().await?;
        let body: UsersCount = decode(response).await?;
        Ok(body.count)
    }

    /// Fetch one user by id.
    pub async fn user(&self, id: &str) -> Result<User, ClientError> {
        let response = self.http.get(self.user_url(id)?).send().await?;
        decode(response).await
    }

    /// Fetch a user's posts, oldest first.
    pub async fn posts_for_user(&self, user_id: &str) -> Result<Vec<Post>, ClientError> {
        let response = self
            .http
            .get(self.posts_url(Some(user_id))?)
            .send()
            .await?;
        decode(response).await
    }

    /// Create a post, returning its assigned id.
    pub async fn create_post(&self, post: &CreatePost) -> Result<CreatedPost, ClientError> {
        let response = self
            .http
            .post(self.posts_url(None)?)
            .json(post)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a post by id. Succeeds whether or not the post existed.
    pub async fn delete_post(&self, id: &str) -> Result<DeleteConfirmation, ClientError> {
        let response = self.http.delete(self.post_url(id)?).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned(),
    };
    Err(ClientError::Api { status, message })
}
