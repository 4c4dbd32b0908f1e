use async_trait::async_trait;

use crate::domain::{
    Comment, Like, NewComment, NewLike, NewPost, NewProfile, NewUser, Post, Profile, User,
};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the stored record, `N` the draft it is created from.
#[async_trait]
pub trait BaseRepository<T, N>: Send + Sync {
    /// Find an entity by its id. A missing id is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError>;

    /// All entities, ordered by id.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Validate and insert a single draft.
    async fn create(&self, draft: N) -> Result<T, RepoError>;

    /// Validate every draft, then insert them in one statement.
    ///
    /// Returns the number of inserted rows. If any draft is invalid nothing
    /// is inserted.
    async fn bulk_create(&self, drafts: Vec<N>) -> Result<u64, RepoError>;

    /// Validate and overwrite the data columns of an existing entity.
    ///
    /// Foreign keys are not written; associations change only through the
    /// accessors. The returned record carries the stored links.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its id.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// User repository with the user side of every association.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn get_profile(&self, user_id: i32) -> Result<Option<Profile>, RepoError>;

    /// Link `profile_id` to the user, detaching any profile linked before.
    async fn set_profile(&self, user_id: i32, profile_id: i32) -> Result<Profile, RepoError>;

    /// Insert a profile already linked to the user, detaching the previous one.
    async fn create_profile(&self, user_id: i32, draft: NewProfile)
    -> Result<Profile, RepoError>;

    async fn get_posts(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn add_post(&self, user_id: i32, post_id: i32) -> Result<(), RepoError>;

    /// Unlink a post. A post owned by someone else is left alone.
    async fn remove_post(&self, user_id: i32, post_id: i32) -> Result<(), RepoError>;

    async fn get_likes(&self, user_id: i32) -> Result<Vec<Like>, RepoError>;

    /// Link a like to the user. Adding an existing pair is a no-op.
    async fn add_like(&self, user_id: i32, like_id: i32) -> Result<(), RepoError>;

    async fn remove_like(&self, user_id: i32, like_id: i32) -> Result<(), RepoError>;
}

#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, NewProfile> {
    async fn get_user(&self, profile_id: i32) -> Result<Option<User>, RepoError>;

    /// Link the profile to `user_id`. Any other profile of that user is detached.
    async fn set_user(&self, profile_id: i32, user_id: i32) -> Result<Profile, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost> {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn get_user(&self, post_id: i32) -> Result<Option<User>, RepoError>;

    async fn set_user(&self, post_id: i32, user_id: i32) -> Result<Post, RepoError>;

    async fn get_comments(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;

    async fn add_comment(&self, post_id: i32, comment_id: i32) -> Result<(), RepoError>;

    async fn remove_comment(&self, post_id: i32, comment_id: i32) -> Result<(), RepoError>;

    async fn create_comment(&self, post_id: i32, draft: NewComment)
    -> Result<Comment, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, NewComment> {
    async fn get_post(&self, comment_id: i32) -> Result<Option<Post>, RepoError>;

    async fn set_post(&self, comment_id: i32, post_id: i32) -> Result<Comment, RepoError>;
}

#[async_trait]
pub trait LikeRepository: BaseRepository<Like, NewLike> {
    async fn get_users(&self, like_id: i32) -> Result<Vec<User>, RepoError>;

    /// Link a user to the like. Adding an existing pair is a no-op.
    async fn add_user(&self, like_id: i32, user_id: i32) -> Result<(), RepoError>;

    async fn remove_user(&self, like_id: i32, user_id: i32) -> Result<(), RepoError>;
}
