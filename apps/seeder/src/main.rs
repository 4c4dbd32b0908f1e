//! # Seeder
//!
//! Resets the schema and bulk-inserts the seed fixtures.

mod config;
mod telemetry;

use anyhow::Context;
use social_core::ports::{BaseRepository, UserRepository};
use social_infra::{SeedData, SocialDatabase, seed};

use config::AppConfig;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        seed_dir = %config.seed_dir.display(),
        sync_mode = ?config.sync_mode,
        "Starting seeder"
    );

    if config.database.is_in_memory() {
        tracing::warn!(
            url = %config.database.url,
            "In-memory database, seeded rows are discarded on exit"
        );
    }

    let data = SeedData::from_dir(&config.seed_dir)
        .await
        .context("loading seed files")?;

    let db = SocialDatabase::open(&config.database)
        .await
        .context("opening database")?;

    let outcome = run(&db, &config, &data).await;
    db.close().await.context("closing database")?;

    outcome
}

async fn run(db: &SocialDatabase, config: &AppConfig, data: &SeedData) -> anyhow::Result<()> {
    db.sync(config.sync_mode)
        .await
        .context("synchronizing schema")?;

    let repos = db.repositories();
    let report = seed(&repos, data).await.context("seeding")?;

    for user in repos.users.find_all().await? {
        let profile = repos.users.get_profile(user.id).await?;
        let posts = repos.users.get_posts(user.id).await?;
        let likes = repos.users.get_likes(user.id).await?;
        tracing::debug!(
            user_id = user.id,
            username = %user.username,
            has_profile = profile.is_some(),
            posts = posts.len(),
            likes = likes.len(),
            "Seeded user"
        );
    }

    tracing::info!(total = report.total(), "Seeding complete");
    Ok(())
}
