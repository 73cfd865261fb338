//! HTTP handlers and route configuration for both servers.

mod graphql;
mod health;
mod posts;

use actix_web::web;

/// Routes served by the GraphQL process.
///
/// The health check is a plain resource rather than an `/api` scope so the
/// REST routes can be mounted next to it on one app.
pub fn configure_graphql(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/graphql")
            .route(web::post().to(graphql::execute))
            .route(web::get().to(graphql::graphiql)),
    )
    .route("/api/health", web::get().to(health::health_check));
}

/// Routes served by the REST process.
pub fn configure_rest(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::list_posts)),
    );
}
