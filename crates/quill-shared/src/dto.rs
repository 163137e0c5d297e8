//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are all optional so that presence can be checked
//! explicitly and reported by name, instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Structured author as accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl AuthorPayload {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
}

/// Body of `PUT /posts/{id}`. `id` must repeat the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
}

/// A post as returned by the API, with the author flattened to "First Last".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_payload_uses_camel_case() {
        let json = serde_json::to_value(AuthorPayload::new("Harry", "Roberts")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"firstName": "Harry", "lastName": "Roberts"})
        );
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title": "T", "author": {"firstName": "Harry"}}"#).unwrap();

        assert_eq!(req.title.as_deref(), Some("T"));
        assert!(req.content.is_none());
        let author = req.author.unwrap();
        assert_eq!(author.first_name.as_deref(), Some("Harry"));
        assert!(author.last_name.is_none());
    }
}
