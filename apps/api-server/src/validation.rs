//! Request validation at the API boundary.
//!
//! Turns loosely-typed request bodies into validated domain values, or a
//! `BadRequest` naming the first offending field.

use quill_core::DomainError;
use quill_core::domain::{Author, NewPost, PostChanges};
use quill_shared::dto::{AuthorPayload, CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};

/// Validate a `POST /posts` body.
///
/// Fields are checked in order: `title`, `content`, `author.firstName`,
/// `author.lastName`.
pub fn new_post(req: CreatePostRequest) -> AppResult<NewPost> {
    let title = present("title", req.title)?;
    let content = present("content", req.content)?;
    let author = author(present("author", req.author)?)?;

    Ok(NewPost::new(author, title, content)?)
}

/// Validate a `PUT /posts/{id}` body against the path id.
///
/// Ids are compared as exact strings, so the same UUID in a different case
/// is a mismatch.
pub fn post_changes(path_id: &str, req: UpdatePostRequest) -> AppResult<PostChanges> {
    match req.id.as_deref() {
        Some(body_id) if body_id == path_id => {}
        body_id => {
            let message = format!(
                "Request path id ({}) and request body id ({}) must match",
                path_id,
                body_id.unwrap_or("none")
            );
            tracing::debug!("{}", message);
            return Err(DomainError::Validation(message).into());
        }
    }

    let author = req.author.map(author).transpose()?;
    Ok(PostChanges::new(req.title, req.content, author)?)
}

fn author(payload: AuthorPayload) -> AppResult<Author> {
    let first_name = present("author.firstName", payload.first_name)?;
    let last_name = present("author.lastName", payload.last_name)?;
    Ok(Author::new(first_name, last_name)?)
}

fn present<T>(field: &'static str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| {
        tracing::debug!(field, "Missing required field");
        DomainError::MissingField { field }.into()
    })
}
