use async_graphql::{Context, Object, Result};
use inkwell_core::CurrentUser;

use super::blog;
use super::error::graphql_error;
use super::types::{CreateAuthorInput, CreatePostInput, NewAuthorObject, PostObject};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register an author and hand back its bearer token.
    async fn create_author(
        &self,
        ctx: &Context<'_>,
        input: CreateAuthorInput,
    ) -> Result<NewAuthorObject> {
        let created = blog(ctx)
            .create_author(&input.name)
            .await
            .map_err(graphql_error)?;

        tracing::info!(author_id = %created.id, "Author created");
        Ok(created.into())
    }

    /// Publish a post as the authenticated author.
    async fn create_post(&self, ctx: &Context<'_>, input: CreatePostInput) -> Result<PostObject> {
        let current = ctx.data_opt::<CurrentUser>();
        let post = blog(ctx)
            .create_post(current, input.title, input.content)
            .await
            .map_err(graphql_error)?;

        tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");
        Ok(PostObject(post))
    }
}
