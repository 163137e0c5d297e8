use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;
use crate::error::DomainError;

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Materialize a new post, assigning its id and creation time.
    ///
    /// `created` is truncated to microseconds, the precision every backend keeps.
    pub fn from_new(new: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: new.author,
            title: new.title,
            content: new.content,
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Apply a partial update. `id` and `created` are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

/// A validated post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(
        author: Author,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            author,
            title: required("title", title.into())?,
            content: required("content", content.into())?,
        })
    }
}

/// A validated partial update of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl PostChanges {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<Author>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: title.map(|t| required("title", t)).transpose()?,
            content: content.map(|c| required("content", c)).transpose()?,
            author,
        })
    }

    /// True when there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

fn required(field: &'static str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harry() -> Author {
        Author::new("Harry", "Roberts").unwrap()
    }

    #[test]
    fn test_from_new_assigns_unique_ids() {
        let new = NewPost::new(harry(), "T", "C").unwrap();
        let a = Post::from_new(new.clone());
        let b = Post::from_new(new);

        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "T");
        assert_eq!(a.content, "C");
        assert_eq!(a.author, harry());
    }

    #[test]
    fn test_new_post_requires_title_and_content() {
        let err = NewPost::new(harry(), "", "C").unwrap_err();
        assert!(matches!(err, DomainError::MissingField { field: "title" }));

        let err = NewPost::new(harry(), "T", "   ").unwrap_err();
        assert!(matches!(err, DomainError::MissingField { field: "content" }));
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut post = Post::from_new(NewPost::new(harry(), "Old title", "Old content").unwrap());
        let id = post.id;
        let created = post.created;

        post.apply(PostChanges::new(Some("New title".into()), None, None).unwrap());

        assert_eq!(post.title, "New title");
        assert_eq!(post.content, "Old content");
        assert_eq!(post.author, harry());
        assert_eq!(post.id, id);
        assert_eq!(post.created, created);
    }

    #[test]
    fn test_empty_changes() {
        assert!(PostChanges::default().is_empty());
        assert!(PostChanges::new(None, None, None).unwrap().is_empty());
        assert!(!PostChanges::new(None, Some("c".into()), None).unwrap().is_empty());
        assert!(PostChanges::new(Some(" ".into()), None, None).is_err());
    }
}
