//! GraphQL schema: authors, posts, and the two mutations that create them.

mod error;
mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Schema};
use inkwell_core::BlogService;
use uuid::Uuid;

pub use error::graphql_error;
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{AuthorObject, CreateAuthorInput, CreatePostInput, NewAuthorObject, PostObject};

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the blog service as shared context data.
///
/// The per-request `CurrentUser` is attached by the HTTP handler, not here.
pub fn build_schema(blog: Arc<BlogService>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(blog)
        .finish()
}

fn blog<'a>(ctx: &Context<'a>) -> &'a BlogService {
    ctx.data_unchecked::<Arc<BlogService>>()
}

/// IDs that are not UUIDs cannot name a stored record.
fn parse_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}
