//! # Inkwell API Server
//!
//! Library behind the `graphql-server` and `rest-server` binaries. Both
//! processes share configuration, state construction and telemetry; they
//! differ only in the routes they mount and the port they bind.

pub mod config;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use config::AppConfig;
use state::AppState;

/// Which HTTP surface a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Graphql,
    Rest,
}

impl Surface {
    pub fn name(self) -> &'static str {
        match self {
            Surface::Graphql => "inkwell-graphql",
            Surface::Rest => "inkwell-rest",
        }
    }

    fn port(self, config: &AppConfig) -> u16 {
        match self {
            Surface::Graphql => config.graphql_port,
            Surface::Rest => config.rest_port,
        }
    }

    fn routes(self) -> fn(&mut web::ServiceConfig) {
        match self {
            Surface::Graphql => handlers::configure_graphql,
            Surface::Rest => handlers::configure_rest,
        }
    }
}

/// Load configuration, connect, and serve until a shutdown signal arrives.
pub async fn run(surface: Surface) -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init_telemetry(&config.telemetry, surface.name());

    let state = AppState::connect(&config).await?;
    let port = surface.port(&config);

    tracing::info!("Starting {} on {}:{}", surface.name(), config.host, port);

    let server_state = state.clone();
    let routes = surface.routes();
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(server_state.clone()))
            .configure(routes)
    })
    .bind((config.host.as_str(), port))?
    .run()
    .await?;

    tracing::info!("{} stopped", surface.name());
    state.shutdown().await;

    Ok(())
}
