//! GraphQL server - authors and posts over `/graphql`.

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    api_server::run(api_server::Surface::Graphql).await
}
