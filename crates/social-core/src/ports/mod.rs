//! Ports - trait definitions for persistence.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

pub use repository::{
    BaseRepository, CommentRepository, LikeRepository, PostRepository, ProfileRepository,
    UserRepository,
};
