//! SeaORM-backed post store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
    Schema, Set,
};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostChanges};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

use super::connections::{DatabaseConfig, connect};
use super::entity::post::{self, Entity as PostEntity};

/// Post store over a SQL database (Postgres in production, SQLite in tests).
pub struct DatabasePostStore {
    db: DbConn,
}

impl DatabasePostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Connect and make sure the `posts` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = connect(config).await.map_err(map_db_err)?;
        let store = Self::new(db);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `posts` table if it is missing.
    pub async fn ensure_schema(&self) -> Result<(), RepoError> {
        let backend = self.db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(PostEntity);
        stmt.if_not_exists();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(map_db_err)?;

        tracing::debug!("posts table ready");
        Ok(())
    }
}

#[async_trait]
impl PostStore for DatabasePostStore {
    async fn insert_many(&self, records: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<Post> = records.into_iter().map(Post::from_new).collect();
        let rows = posts.iter().cloned().map(post::ActiveModel::from);

        let inserted = PostEntity::insert_many(rows)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_write_err)?;

        tracing::debug!(count = inserted, "Inserted posts");
        Ok(posts)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let model = PostEntity::find().one(&self.db).await.map_err(map_db_err)?;
        Ok(model.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        if changes.is_empty() {
            tracing::debug!(post_id = %id, "Empty update, nothing to write");
            return Ok(());
        }

        let mut active = model.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        if let Some(author) = changes.author {
            active.author_first_name = Set(author.first_name);
            active.author_last_name = Set(author.last_name);
        }

        active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => map_write_err(other),
        })?;

        tracing::debug!(post_id = %id, "Updated post");
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = %id, deleted = result.rows_affected, "Deleted post");
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::warn!(deleted = result.rows_affected, "Dropped all posts");
        Ok(())
    }

    async fn close(&self) -> Result<(), RepoError> {
        self.db.close_by_ref().await.map_err(map_db_err)?;
        tracing::info!("Database connection closed");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "database"
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

fn map_write_err(err: DbErr) -> RepoError {
    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("UNIQUE") || err_str.contains("unique") {
        RepoError::Constraint("Post already exists".to_string())
    } else {
        map_db_err(err)
    }
}
