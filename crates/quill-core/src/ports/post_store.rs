use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Persistence port for posts.
///
/// The store owns the canonical record: it assigns `id` and `created` on
/// insert and never changes them afterwards.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a batch of posts. Used for seeding.
    async fn insert_many(&self, records: Vec<NewPost>) -> Result<Vec<Post>, RepoError>;

    /// Every stored post, oldest first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Any one stored post.
    async fn find_one(&self) -> Result<Option<Post>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Insert a single post.
    async fn create(&self, record: NewPost) -> Result<Post, RepoError> {
        self.insert_many(vec![record])
            .await?
            .pop()
            .ok_or_else(|| RepoError::Query("insert returned no rows".to_string()))
    }

    /// Apply a partial update. Returns `RepoError::NotFound` for unknown ids.
    async fn update_by_id(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError>;

    /// Delete a post. Deleting an absent id succeeds.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;

    /// Remove every post.
    async fn drop_all(&self) -> Result<(), RepoError>;

    /// Release the underlying connection.
    async fn close(&self) -> Result<(), RepoError> {
        Ok(())
    }

    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;
}
