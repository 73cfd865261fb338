//! GraphQL transport over actix-web.

use actix_web::{HttpResponse, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /graphql
///
/// Resolves the bearer token (if any) to the current author before executing.
pub async fn execute(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    request: GraphQLRequest,
) -> AppResult<GraphQLResponse> {
    let mut request = request.into_inner();

    if let OptionalIdentity(Some(identity)) = identity {
        match state.blog.current_user(identity.author_id).await? {
            Some(user) => request = request.data(user),
            None => tracing::debug!(
                author_id = %identity.author_id,
                "Token names an unknown author; continuing unauthenticated"
            ),
        }
    }

    Ok(state.schema.execute(request).await.into())
}

/// GET /graphql - GraphiQL explorer.
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
