use std::time::Duration;

#[cfg(feature = "postgres")]
use std::sync::Arc;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

/// Process-wide database handle.
///
/// Acquired once at startup and handed to the repositories; released with
/// [`DbHandle::close`] when the server shuts down.
#[cfg(feature = "postgres")]
#[derive(Clone)]
pub struct DbHandle {
    conn: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DbHandle {
    /// Open the connection pool. Fails fast if the database is unreachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(pool = config.max_connections, "Database connected");

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// Shared reference to the connection, for handing to repositories.
    pub fn conn(&self) -> Arc<DbConn> {
        Arc::clone(&self.conn)
    }

    /// Close the pool, waiting for checked-out connections to return.
    ///
    /// Every repository built from [`DbHandle::conn`] must be dropped first;
    /// otherwise the pool is left to close when its last owner goes away.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => {
                conn.close().await?;
                tracing::info!("Database connection closed");
            }
            Err(shared) => {
                tracing::warn!(
                    owners = Arc::strong_count(&shared),
                    "Database connection still in use; dropping handle without closing"
                );
            }
        }
        Ok(())
    }
}
