//! # Social Infrastructure
//!
//! sea-orm implementations of the ports defined in `social-core`:
//! entities and their association graph, the connection handle, the
//! repositories and the seed loader.

pub mod database;
pub mod seed;

pub use database::{DatabaseConfig, Repositories, SocialDatabase, SyncMode};
pub use seed::{SeedData, SeedError, SeedReport, seed};
