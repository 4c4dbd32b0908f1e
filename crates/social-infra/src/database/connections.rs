use std::sync::Arc;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use super::Repositories;

/// Configuration for the database handle.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
        }
    }

    /// A private in-memory SQLite database.
    ///
    /// Every pooled connection to `sqlite::memory:` sees its own database, so
    /// the pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite::memory:") || self.url.contains("mode=memory")
    }
}

/// How [`SocialDatabase::sync`] treats existing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Drop every table, then recreate the schema.
    Force,
    /// Apply only the migrations that have not run yet.
    Alter,
}

/// Handle to the social database.
///
/// Open it once, pass it (or the repositories built from it) to whoever
/// needs it, and [`close`](Self::close) it when done.
///
/// # Example
/// ```ignore
/// let db = SocialDatabase::open(&DatabaseConfig::in_memory()).await?;
/// db.sync(SyncMode::Force).await?;
/// let repos = db.repositories();
/// let likes = repos.users.get_likes(1).await?;
/// drop(repos);
/// db.close().await?;
/// ```
pub struct SocialDatabase {
    conn: Arc<DbConn>,
}

impl SocialDatabase {
    /// Connect using the given configuration.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Opening database connection...");

        let max_connections = if config.is_in_memory() {
            1
        } else {
            config.max_connections
        };

        let opts = ConnectOptions::new(&config.url)
            .max_connections(max_connections)
            .min_connections(config.min_connections.min(max_connections))
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", max_connections);

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// Bring the schema up to date. Must complete before any seeding.
    pub async fn sync(&self, mode: SyncMode) -> Result<(), DbErr> {
        match mode {
            SyncMode::Force => {
                tracing::info!("Resetting schema (all data is dropped)");
                Migrator::fresh(&*self.conn).await?;
            }
            SyncMode::Alter => {
                tracing::info!("Applying pending migrations");
                Migrator::up(&*self.conn, None).await?;
            }
        }
        Ok(())
    }

    /// Repositories sharing this handle's pool.
    pub fn repositories(&self) -> Repositories {
        Repositories::new(Arc::clone(&self.conn))
    }

    /// Release the pool.
    ///
    /// Repositories built from this handle keep the pool alive; if any are
    /// still held, the pool closes when the last of them is dropped.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => {
                conn.close().await?;
                tracing::info!("Database connection closed");
            }
            Err(_) => {
                tracing::warn!("Repositories still hold the pool, deferring close");
            }
        }
        Ok(())
    }
}
