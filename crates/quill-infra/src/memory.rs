//! In-memory post store - used as fallback when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostChanges};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

/// In-memory post store using a Vec behind an async RwLock.
///
/// Posts are kept in insertion order, so `find_all` is stable.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert_many(&self, records: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        let created: Vec<Post> = records.into_iter().map(Post::from_new).collect();

        let mut posts = self.posts.write().await;
        posts.extend(created.iter().cloned());

        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.first().cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(changes);
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        self.posts.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        self.posts.write().await.clear();
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
