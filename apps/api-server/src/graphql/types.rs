//! GraphQL object and input types.

use async_graphql::{Context, ID, InputObject, Object, Result, SimpleObject};
use inkwell_core::NewAuthor;
use inkwell_core::domain::{Author, Post};

use super::{blog, graphql_error};

/// GraphQL view of an author.
pub struct AuthorObject(pub Author);

#[Object(name = "Author")]
impl AuthorObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Posts attributed to this author, looked up on demand.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = blog(ctx)
            .posts_by_author(self.0.id)
            .await
            .map_err(graphql_error)?;

        Ok(posts.into_iter().map(PostObject).collect())
    }
}

/// GraphQL view of a post.
pub struct PostObject(pub Post);

#[Object(name = "Post")]
impl PostObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    /// The author this post is attributed to; `null` if it no longer resolves.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<AuthorObject>> {
        let author = blog(ctx).author_of(&self.0).await.map_err(graphql_error)?;

        Ok(author.map(AuthorObject))
    }
}

/// Returned once from `createAuthor`; the token is not retrievable later.
#[derive(SimpleObject)]
#[graphql(name = "NewAuthor")]
pub struct NewAuthorObject {
    pub id: ID,
    pub name: String,
    pub token: String,
}

impl From<NewAuthor> for NewAuthorObject {
    fn from(created: NewAuthor) -> Self {
        Self {
            id: ID(created.id.to_string()),
            name: created.name,
            token: created.token,
        }
    }
}

#[derive(InputObject)]
pub struct CreateAuthorInput {
    pub name: String,
}

/// The author is taken from the bearer token, never from the input.
#[derive(InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}
