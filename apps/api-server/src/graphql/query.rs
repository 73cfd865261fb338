use async_graphql::{Context, ID, Object, Result};
use inkwell_core::CurrentUser;

use super::types::{AuthorObject, PostObject};
use super::{blog, graphql_error, parse_id};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Liveness probe.
    async fn test(&self) -> &'static str {
        "API up and running!"
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = blog(ctx).list_posts().await.map_err(graphql_error)?;

        Ok(posts.into_iter().map(PostObject).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PostObject>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let post = blog(ctx).post(id).await.map_err(graphql_error)?;

        Ok(post.map(PostObject))
    }

    /// Every author. Requires a bearer token.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<AuthorObject>> {
        let current = ctx.data_opt::<CurrentUser>();
        let authors = blog(ctx)
            .list_authors(current)
            .await
            .map_err(graphql_error)?;

        Ok(authors.into_iter().map(AuthorObject).collect())
    }

    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<AuthorObject>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let author = blog(ctx).author(id).await.map_err(graphql_error)?;

        Ok(author.map(AuthorObject))
    }
}
