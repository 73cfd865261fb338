//! In-memory repositories - used when no database is configured and in tests.
//!
//! Data is lost on process restart and is not shared between processes.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkwell_core::domain::{Author, Post};
use inkwell_core::error::RepoError;
use inkwell_core::ports::{AuthorRepository, BaseRepository, PostRepository};

/// Authors kept in insertion order behind an async `RwLock`.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    store: RwLock<Vec<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|a| a.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, entity: Author) -> Result<Author, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|a| a.id == entity.id) {
            return Err(RepoError::Constraint(format!(
                "author {} already exists",
                entity.id
            )));
        }
        store.push(entity.clone());
        Ok(entity)
    }
}

impl AuthorRepository for InMemoryAuthorRepository {}

/// Posts kept in insertion order behind an async `RwLock`.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|p| p.id == entity.id) {
            return Err(RepoError::Constraint(format!(
                "post {} already exists",
                entity.id
            )));
        }
        store.push(entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }
}
