//! Fixture loading: five JSON seed files, bulk-inserted in dependency order.
//!
//! Seed files hold plain records without ids. Associations are never part of
//! the seed; wire them afterwards through the repository accessors.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use social_core::domain::{NewComment, NewLike, NewPost, NewProfile, NewUser};
use social_core::error::RepoError;
use social_core::ports::BaseRepository;

use crate::database::Repositories;

pub const USERS_FILE: &str = "users.json";
pub const PROFILES_FILE: &str = "profiles.json";
pub const POSTS_FILE: &str = "posts.json";
pub const COMMENTS_FILE: &str = "comments.json";
pub const LIKES_FILE: &str = "likes.json";

const BUNDLED_USERS: &str = include_str!("../../../seed/users.json");
const BUNDLED_PROFILES: &str = include_str!("../../../seed/profiles.json");
const BUNDLED_POSTS: &str = include_str!("../../../seed/posts.json");
const BUNDLED_COMMENTS: &str = include_str!("../../../seed/comments.json");
const BUNDLED_LIKES: &str = include_str!("../../../seed/likes.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// The records of all five seed files.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<NewUser>,
    pub profiles: Vec<NewProfile>,
    pub posts: Vec<NewPost>,
    pub comments: Vec<NewComment>,
    pub likes: Vec<NewLike>,
}

/// Rows inserted per entity by [`seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub profiles: u64,
    pub posts: u64,
    pub comments: u64,
    pub likes: u64,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.users + self.profiles + self.posts + self.comments + self.likes
    }
}

fn parse<T: DeserializeOwned>(file: &str, raw: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(raw).map_err(|source| SeedError::Parse {
        file: file.to_string(),
        source,
    })
}

async fn read(dir: &Path, file: &str) -> Result<String, SeedError> {
    let path = dir.join(file);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| SeedError::Io { path, source })
}

impl SeedData {
    /// The seed files shipped in the repository's `seed/` directory.
    pub fn bundled() -> Result<Self, SeedError> {
        Ok(Self {
            users: parse(USERS_FILE, BUNDLED_USERS)?,
            profiles: parse(PROFILES_FILE, BUNDLED_PROFILES)?,
            posts: parse(POSTS_FILE, BUNDLED_POSTS)?,
            comments: parse(COMMENTS_FILE, BUNDLED_COMMENTS)?,
            likes: parse(LIKES_FILE, BUNDLED_LIKES)?,
        })
    }

    /// Read the five seed files from `dir`.
    pub async fn from_dir(dir: impl AsRef<Path>) -> Result<Self, SeedError> {
        let dir = dir.as_ref();
        tracing::debug!(dir = %dir.display(), "Loading seed files");

        Ok(Self {
            users: parse(USERS_FILE, &read(dir, USERS_FILE).await?)?,
            profiles: parse(PROFILES_FILE, &read(dir, PROFILES_FILE).await?)?,
            posts: parse(POSTS_FILE, &read(dir, POSTS_FILE).await?)?,
            comments: parse(COMMENTS_FILE, &read(dir, COMMENTS_FILE).await?)?,
            likes: parse(LIKES_FILE, &read(dir, LIKES_FILE).await?)?,
        })
    }
}

/// Bulk-insert every seed record. Stops at the first failing entity.
pub async fn seed(repos: &Repositories, data: &SeedData) -> Result<SeedReport, SeedError> {
    let report = SeedReport {
        users: repos.users.bulk_create(data.users.clone()).await?,
        profiles: repos.profiles.bulk_create(data.profiles.clone()).await?,
        posts: repos.posts.bulk_create(data.posts.clone()).await?,
        comments: repos.comments.bulk_create(data.comments.clone()).await?,
        likes: repos.likes.bulk_create(data.likes.clone()).await?,
    };

    tracing::info!(
        users = report.users,
        profiles = report.profiles,
        posts = report.posts,
        comments = report.comments,
        likes = report.likes,
        "Seed data inserted"
    );

    Ok(report)
}
