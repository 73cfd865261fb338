//! Application state - shared across all handlers.

use std::sync::Arc;

use inkwell_core::BlogService;
use inkwell_core::ports::{AuthorRepository, PostRepository, TokenService};
use inkwell_infra::{InMemoryAuthorRepository, InMemoryPostRepository, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
use inkwell_infra::DbHandle;
#[cfg(feature = "postgres")]
use inkwell_infra::database::{PostgresAuthorRepository, PostgresPostRepository};

use crate::config::AppConfig;
use crate::graphql::{BlogSchema, build_schema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
    pub schema: BlogSchema,
    #[cfg(feature = "postgres")]
    db: Option<DbHandle>,
}

impl AppState {
    /// Wire the blog service and schema over the given repositories.
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        let blog = Arc::new(BlogService::new(authors, posts, tokens));
        let schema = build_schema(Arc::clone(&blog));

        Self {
            blog,
            schema,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// State backed by in-memory repositories. Nothing is shared across processes.
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self::new(
            Arc::new(InMemoryAuthorRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(JwtTokenService::new(jwt)),
        )
    }

    /// Build the state for a server process, connecting to the database.
    ///
    /// A missing URL or unreachable database is fatal.
    #[cfg(feature = "postgres")]
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let db_config = config
            .database
            .as_ref()
            .ok_or(crate::config::ConfigError::Missing("DATABASE_URL"))?;

        let db = DbHandle::connect(db_config).await?;

        let mut state = Self::new(
            Arc::new(PostgresAuthorRepository::new(db.conn())),
            Arc::new(PostgresPostRepository::new(db.conn())),
            Arc::new(JwtTokenService::new(config.jwt.clone())),
        );
        state.db = Some(db);

        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        if config.database.is_some() {
            tracing::warn!("Built without the postgres feature; ignoring DATABASE_URL");
        }
        tracing::info!("Running with in-memory repositories");
        Ok(Self::in_memory(config.jwt.clone()))
    }

    /// Release the database pool once the server has stopped.
    #[cfg(feature = "postgres")]
    pub async fn shutdown(self) {
        let Self { blog, schema, db } = self;
        // Repositories hold the other references to the pool.
        drop(schema);
        drop(blog);

        if let Some(db) = db {
            if let Err(e) = db.close().await {
                tracing::warn!(error = %e, "Failed to close database connection");
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn shutdown(self) {}
}
