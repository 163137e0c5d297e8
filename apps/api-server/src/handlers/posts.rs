//! Post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation;

/// Wire form of a post. The author is flattened to "First Last".
pub fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author.full_name(),
        created: post.created.to_rfc3339(),
    }
}

/// Ids that do not parse cannot name a stored post.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn post_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Post with id {} not found", id))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    let post = match parse_id(&raw_id) {
        Some(id) => state.posts.find_by_id(id).await?,
        None => None,
    }
    .ok_or_else(|| post_not_found(&raw_id))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = validation::new_post(body.into_inner())?;

    let post = state.posts.create(new_post).await?;
    tracing::info!(post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(post_response(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let changes = validation::post_changes(&raw_id, body.into_inner())?;

    let id = parse_id(&raw_id).ok_or_else(|| post_not_found(&raw_id))?;

    state
        .posts
        .update_by_id(id, changes)
        .await
        .map_err(|e| match e {
            RepoError::NotFound => post_not_found(&raw_id),
            other => other.into(),
        })?;

    tracing::info!(post_id = %id, "Updated post");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Always 204: deleting a post that does not exist is not an error.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    if let Some(id) = parse_id(&raw_id) {
        state.posts.delete_by_id(id).await?;
        tracing::info!(post_id = %id, "Deleted post");
    }

    Ok(HttpResponse::NoContent().finish())
}
