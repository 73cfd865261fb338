//! Blog operations shared by the GraphQL and REST transports.
//!
//! Each operation is a single repository call, optionally preceded by a
//! current-user check. Relationship fields (`Author.posts`, `Post.author`) are
//! resolved one parent at a time.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Author, Post};
use crate::error::DomainError;
use crate::ports::{AuthorRepository, PostRepository, TokenService};

/// The author resolved from a verified bearer token, scoped to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub Author);

impl CurrentUser {
    pub fn id(&self) -> Uuid {
        self.0.id
    }
}

/// Result of `create_author`: the stored author plus its credential.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub id: Uuid,
    pub name: String,
    pub token: String,
}

/// Operation layer over the author and post repositories.
#[derive(Clone)]
pub struct BlogService {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
    tokens: Arc<dyn TokenService>,
}

impl BlogService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            authors,
            posts,
            tokens,
        }
    }

    pub fn tokens(&self) -> &dyn TokenService {
        self.tokens.as_ref()
    }

    /// Resolve the author a verified token points at.
    ///
    /// A token for an author that no longer exists yields `None` rather than an error.
    pub async fn current_user(&self, author_id: Uuid) -> Result<Option<CurrentUser>, DomainError> {
        Ok(self.authors.find_by_id(author_id).await?.map(CurrentUser))
    }

    pub async fn list_authors(
        &self,
        current: Option<&CurrentUser>,
    ) -> Result<Vec<Author>, DomainError> {
        if current.is_none() {
            return Err(DomainError::Unauthenticated(
                "You must be logged in to see authors",
            ));
        }

        Ok(self.authors.find_all().await?)
    }

    pub async fn author(&self, id: Uuid) -> Result<Option<Author>, DomainError> {
        Ok(self.authors.find_by_id(id).await?)
    }

    /// Persist a new author and issue a token embedding its id.
    pub async fn create_author(&self, name: &str) -> Result<NewAuthor, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Author name must not be empty".to_string(),
            ));
        }

        let saved = self.authors.insert(Author::new(name.to_string())).await?;
        let token = self.tokens.generate_token(saved.id)?;

        Ok(NewAuthor {
            id: saved.id,
            name: saved.name,
            token,
        })
    }

    /// Posts attributed to the given author.
    pub async fn posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_author_id(author_id).await?)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn post(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.find_by_id(id).await?)
    }

    /// Create a post attributed to the current user.
    pub async fn create_post(
        &self,
        current: Option<&CurrentUser>,
        title: String,
        content: String,
    ) -> Result<Post, DomainError> {
        let Some(user) = current else {
            return Err(DomainError::Unauthenticated(
                "You must be logged in to create a post",
            ));
        };

        Ok(self.posts.insert(Post::new(user.id(), title, content)).await?)
    }

    /// The author a post is attributed to, if it still resolves.
    pub async fn author_of(&self, post: &Post) -> Result<Option<Author>, DomainError> {
        Ok(self.authors.find_by_id(post.author_id).await?)
    }
}
