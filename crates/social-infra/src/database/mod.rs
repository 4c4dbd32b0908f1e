//! Database handle, entities and repositories.

mod connections;

mod base;
pub mod entity;
pub mod repos;

pub use base::SeaBaseRepository;
pub use connections::{DatabaseConfig, SocialDatabase, SyncMode};
pub use repos::{
    Repositories, SeaCommentRepository, SeaLikeRepository, SeaPostRepository,
    SeaProfileRepository, SeaUserRepository,
};
