use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Generic repository trait for insert-only collections.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Return every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Author repository.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts whose `author_id` equals the given author.
    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;
}
