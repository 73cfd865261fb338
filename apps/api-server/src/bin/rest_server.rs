//! REST server - `GET /api/posts`.

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    api_server::run(api_server::Surface::Rest).await
}
