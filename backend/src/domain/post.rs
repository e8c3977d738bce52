//! Post entity and the validated input for creating one.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A post record in its externally consumed shape.
///
/// All fields are strings; `user_id` serialises as `userId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[schema(example = "9f2c4e6a8b1d4f3e9c7a5b3d1e8f6a4c")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub user_id: String,
}

/// Identifier assigned to a freshly created post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedPost {
    pub id: String,
}

/// Validation failures raised by [`NewPost::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewPostValidationError {
    /// One or more required fields were absent or blank.
    #[error("title, body, and userId are required")]
    MissingFields,
}

/// Validated input for creating a post; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    body: String,
    user_id: String,
}

impl NewPost {
    /// Validate the three required fields, treating blank values as absent.
    ///
    /// # Errors
    /// Returns [`NewPostValidationError::MissingFields`] when any field is
    /// empty after trimming.
    pub fn try_from_parts(
        title: impl Into<String>,
        body: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, NewPostValidationError> {
        let title = title.into();
        let body = body.into();
        let user_id = user_id.into();
        if title.trim().is_empty() || body.trim().is_empty() || user_id.trim().is_empty() {
            return Err(NewPostValidationError::MissingFields);
        }
        Ok(Self {
            title,
            body,
            user_id,
        })
    }

    /// Post title as submitted.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Post body as submitted.
    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Identifier of the owning user.
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "B", "U")]
    #[case("T", "", "U")]
    #[case("T", "B", "")]
    #[case("   ", "B", "U")]
    fn blank_required_fields_are_rejected(
        #[case] title: &str,
        #[case] body: &str,
        #[case] user_id: &str,
    ) {
        assert_eq!(
            NewPost::try_from_parts(title, body, user_id),
            Err(NewPostValidationError::MissingFields)
        );
    }

    #[test]
    fn valid_parts_are_kept_verbatim() {
        let post = NewPost::try_from_parts("T", "B", "U").expect("valid post");
        assert_eq!(post.title(), "T");
        assert_eq!(post.body(), "B");
        assert_eq!(post.user_id(), "U");
    }

    #[test]
    fn post_serialises_user_id_as_camel_case() {
        let post = Post {
            id: "p1".into(),
            title: "T".into(),
            body: "B".into(),
            user_id: "u1".into(),
        };
        let value = serde_json::to_value(&post).expect("post serialises");
        assert_eq!(value["userId"], "u1");
        assert!(value.get("user_id").is_none());
    }
}
