//! Seeder configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use social_infra::{DatabaseConfig, SyncMode};

/// SQLite file created next to the working directory on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://social.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub seed_dir: PathBuf,
    pub sync_mode: SyncMode,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::new(database_url(env::var("DATABASE_URL").ok()));

        let database = DatabaseConfig {
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_connections),
            ..defaults
        };

        Self {
            database,
            seed_dir: env::var("SEED_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("seed")),
            sync_mode: parse_sync_mode(env::var("DB_RESET").ok().as_deref()),
        }
    }
}

fn database_url(value: Option<String>) -> String {
    value
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// `DB_RESET` defaults to a destructive reset; "false"/"0" only migrates.
fn parse_sync_mode(value: Option<&str>) -> SyncMode {
    match value.map(str::to_lowercase).as_deref() {
        Some("false") | Some("0") | Some("no") => SyncMode::Alter,
        _ => SyncMode::Force,
    }
}
