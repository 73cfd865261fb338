//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use inkwell_core::domain::Post;
use inkwell_core::error::RepoError;
use inkwell_core::ports::{AuthorRepository, PostRepository};

use super::entity::author::Entity as AuthorEntity;
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl AuthorRepository for PostgresAuthorRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(%author_id, "Finding posts by author");

        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .all(&*self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
