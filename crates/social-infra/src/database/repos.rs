//! sea-orm repository implementations, one per entity.
//!
//! Accessors that name a record by id check that it exists first and fail
//! with `RepoError::MissingReference` otherwise.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, EntityTrait, IntoActiveModel,
    ModelTrait, PrimaryKeyTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use social_core::domain::{
    Comment, Like, NewComment, NewProfile, Post, Profile, User, Validate,
};
use social_core::error::RepoError;
use social_core::ports::{
    CommentRepository, LikeRepository, PostRepository, ProfileRepository, UserRepository,
};

use super::base::{SeaBaseRepository, map_db_err};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::profile::{self, Entity as ProfileEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::entity::user_like::{self, Entity as UserLikeEntity};
use super::entity::MappedEntity;

pub type SeaUserRepository = SeaBaseRepository<UserEntity>;
pub type SeaProfileRepository = SeaBaseRepository<ProfileEntity>;
pub type SeaPostRepository = SeaBaseRepository<PostEntity>;
pub type SeaCommentRepository = SeaBaseRepository<CommentEntity>;
pub type SeaLikeRepository = SeaBaseRepository<LikeEntity>;

/// The five repositories over one shared connection.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

impl Repositories {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            users: Arc::new(SeaUserRepository::new(Arc::clone(&db))),
            profiles: Arc::new(SeaProfileRepository::new(Arc::clone(&db))),
            posts: Arc::new(SeaPostRepository::new(Arc::clone(&db))),
            comments: Arc::new(SeaCommentRepository::new(Arc::clone(&db))),
            likes: Arc::new(SeaLikeRepository::new(db)),
        }
    }
}

/// Load a row or report the dangling reference.
async fn fetch<E, C>(db: &C, id: i32) -> Result<E::Model, RepoError>
where
    E: MappedEntity,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id)
        .one(db)
        .await
        .map_err(map_db_err)?
        .ok_or(RepoError::MissingReference {
            entity: E::KIND,
            id,
        })
}

fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***"),
            _ => "***".to_string(),
        };
        format!("{masked_local}{domain}")
    } else {
        "***".to_string()
    }
}

/// Clear `user_id` on every profile of the user except `keep`.
async fn detach_profiles<C>(db: &C, user_id: i32, keep: Option<i32>) -> Result<u64, RepoError>
where
    C: ConnectionTrait,
{
    let mut update = ProfileEntity::update_many()
        .col_expr(profile::Column::UserId, Expr::value(Option::<i32>::None))
        .filter(profile::Column::UserId.eq(user_id));
    if let Some(keep) = keep {
        update = update.filter(profile::Column::Id.ne(keep));
    }
    let result = update.exec(db).await.map_err(map_db_err)?;

    Ok(result.rows_affected)
}

/// Link a profile to a user in one transaction, keeping one profile per user.
async fn link_profile(db: &DbConn, user_id: i32, profile_id: i32) -> Result<Profile, RepoError> {
    let txn = db.begin().await.map_err(map_db_err)?;

    fetch::<UserEntity, _>(&txn, user_id).await?;
    let existing = fetch::<ProfileEntity, _>(&txn, profile_id).await?;

    let detached = detach_profiles(&txn, user_id, Some(profile_id)).await?;
    if detached > 0 {
        tracing::debug!(user_id, detached, "Detached previous profile");
    }

    let mut active = existing.into_active_model();
    active.user_id = Set(Some(user_id));
    let model = active.update(&txn).await.map_err(map_db_err)?;

    txn.commit().await.map_err(map_db_err)?;
    tracing::debug!(user_id, profile_id, "Linked profile to user");

    Ok(model.into())
}

async fn link_post(db: &DbConn, user_id: i32, post_id: i32) -> Result<Post, RepoError> {
    fetch::<UserEntity, _>(db, user_id).await?;
    let existing = fetch::<PostEntity, _>(db, post_id).await?;

    let mut active = existing.into_active_model();
    active.user_id = Set(Some(user_id));
    let model = active.update(db).await.map_err(map_db_err)?;
    tracing::debug!(user_id, post_id, "Linked post to user");

    Ok(model.into())
}

async fn link_comment(db: &DbConn, post_id: i32, comment_id: i32) -> Result<Comment, RepoError> {
    fetch::<PostEntity, _>(db, post_id).await?;
    let existing = fetch::<CommentEntity, _>(db, comment_id).await?;

    let mut active = existing.into_active_model();
    active.post_id = Set(Some(post_id));
    let model = active.update(db).await.map_err(map_db_err)?;
    tracing::debug!(post_id, comment_id, "Linked comment to post");

    Ok(model.into())
}

/// Insert the (user, like) join row unless it already exists.
async fn link_user_like(db: &DbConn, user_id: i32, like_id: i32) -> Result<(), RepoError> {
    fetch::<UserEntity, _>(db, user_id).await?;
    fetch::<LikeEntity, _>(db, like_id).await?;

    let existing = UserLikeEntity::find_by_id((user_id, like_id))
        .one(db)
        .await
        .map_err(map_db_err)?;
    if existing.is_some() {
        tracing::debug!(user_id, like_id, "Like already linked, skipping");
        return Ok(());
    }

    UserLikeEntity::insert(user_like::link(user_id, like_id))
        .exec_without_returning(db)
        .await
        .map_err(map_db_err)?;
    tracing::debug!(user_id, like_id, "Linked like to user");

    Ok(())
}

async fn unlink_user_like(db: &DbConn, user_id: i32, like_id: i32) -> Result<(), RepoError> {
    fetch::<UserEntity, _>(db, user_id).await?;
    fetch::<LikeEntity, _>(db, like_id).await?;

    let result = UserLikeEntity::delete_by_id((user_id, like_id))
        .exec(db)
        .await
        .map_err(map_db_err)?;
    tracing::debug!(user_id, like_id, removed = result.rows_affected, "Unlinked like");

    Ok(())
}

#[async_trait]
impl UserRepository for SeaUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .order_by_asc(user::Column::Id)
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn get_profile(&self, user_id: i32) -> Result<Option<Profile>, RepoError> {
        let owner = fetch::<UserEntity, _>(self.conn(), user_id).await?;
        let result = owner
            .find_related(ProfileEntity)
            .order_by_asc(profile::Column::Id)
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn set_profile(&self, user_id: i32, profile_id: i32) -> Result<Profile, RepoError> {
        link_profile(self.conn(), user_id, profile_id).await
    }

    async fn create_profile(
        &self,
        user_id: i32,
        draft: NewProfile,
    ) -> Result<Profile, RepoError> {
        draft.validate()?;

        let txn = self.conn().begin().await.map_err(map_db_err)?;
        fetch::<UserEntity, _>(&txn, user_id).await?;
        detach_profiles(&txn, user_id, None).await?;

        let mut active: profile::ActiveModel = draft.into();
        active.user_id = Set(Some(user_id));
        let model = active.insert(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(user_id, profile_id = model.id, "Created profile for user");

        Ok(model.into())
    }

    async fn get_posts(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let owner = fetch::<UserEntity, _>(self.conn(), user_id).await?;
        let result = owner
            .find_related(PostEntity)
            .order_by_asc(post::Column::Id)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn add_post(&self, user_id: i32, post_id: i32) -> Result<(), RepoError> {
        link_post(self.conn(), user_id, post_id).await.map(|_| ())
    }

    async fn remove_post(&self, user_id: i32, post_id: i32) -> Result<(), RepoError> {
        fetch::<UserEntity, _>(self.conn(), user_id).await?;
        let existing = fetch::<PostEntity, _>(self.conn(), post_id).await?;
        if existing.user_id != Some(user_id) {
            return Ok(());
        }

        let mut active = existing.into_active_model();
        active.user_id = Set(None);
        active.update(self.conn()).await.map_err(map_db_err)?;
        tracing::debug!(user_id, post_id, "Unlinked post from user");

        Ok(())
    }

    async fn get_likes(&self, user_id: i32) -> Result<Vec<Like>, RepoError> {
        let owner = fetch::<UserEntity, _>(self.conn(), user_id).await?;
        let result = owner
            .find_related(LikeEntity)
            .order_by_asc(like::Column::Id)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn add_like(&self, user_id: i32, like_id: i32) -> Result<(), RepoError> {
        link_user_like(self.conn(), user_id, like_id).await
    }

    async fn remove_like(&self, user_id: i32, like_id: i32) -> Result<(), RepoError> {
        unlink_user_like(self.conn(), user_id, like_id).await
    }
}

#[async_trait]
impl ProfileRepository for SeaProfileRepository {
    async fn get_user(&self, profile_id: i32) -> Result<Option<User>, RepoError> {
        let existing = fetch::<ProfileEntity, _>(self.conn(), profile_id).await?;
        let result = existing
            .find_related(UserEntity)
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn set_user(&self, profile_id: i32, user_id: i32) -> Result<Profile, RepoError> {
        link_profile(self.conn(), user_id, profile_id).await
    }
}

#[async_trait]
impl PostRepository for SeaPostRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn get_user(&self, post_id: i32) -> Result<Option<User>, RepoError> {
        let existing = fetch::<PostEntity, _>(self.conn(), post_id).await?;
        let result = existing
            .find_related(UserEntity)
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn set_user(&self, post_id: i32, user_id: i32) -> Result<Post, RepoError> {
        link_post(self.conn(), user_id, post_id).await
    }

    async fn get_comments(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let existing = fetch::<PostEntity, _>(self.conn(), post_id).await?;
        let result = existing
            .find_related(CommentEntity)
            .order_by_asc(comment::Column::Id)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn add_comment(&self, post_id: i32, comment_id: i32) -> Result<(), RepoError> {
        link_comment(self.conn(), post_id, comment_id).await.map(|_| ())
    }

    async fn remove_comment(&self, post_id: i32, comment_id: i32) -> Result<(), RepoError> {
        fetch::<PostEntity, _>(self.conn(), post_id).await?;
        let existing = fetch::<CommentEntity, _>(self.conn(), comment_id).await?;
        if existing.post_id != Some(post_id) {
            return Ok(());
        }

        let mut active = existing.into_active_model();
        active.post_id = Set(None);
        active.update(self.conn()).await.map_err(map_db_err)?;
        tracing::debug!(post_id, comment_id, "Unlinked comment from post");

        Ok(())
    }

    async fn create_comment(
        &self,
        post_id: i32,
        draft: NewComment,
    ) -> Result<Comment, RepoError> {
        draft.validate()?;
        fetch::<PostEntity, _>(self.conn(), post_id).await?;

        let mut active: comment::ActiveModel = draft.into();
        active.post_id = Set(Some(post_id));
        let model = active.insert(self.conn()).await.map_err(map_db_err)?;
        tracing::debug!(post_id, comment_id = model.id, "Created comment on post");

        Ok(model.into())
    }
}

#[async_trait]
impl CommentRepository for SeaCommentRepository {
    async fn get_post(&self, comment_id: i32) -> Result<Option<Post>, RepoError> {
        let existing = fetch::<CommentEntity, _>(self.conn(), comment_id).await?;
        let result = existing
            .find_related(PostEntity)
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn set_post(&self, comment_id: i32, post_id: i32) -> Result<Comment, RepoError> {
        link_comment(self.conn(), post_id, comment_id).await
    }
}

#[async_trait]
impl LikeRepository for SeaLikeRepository {
    async fn get_users(&self, like_id: i32) -> Result<Vec<User>, RepoError> {
        let existing = fetch::<LikeEntity, _>(self.conn(), like_id).await?;
        let result = existing
            .find_related(UserEntity)
            .order_by_asc(user::Column::Id)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn add_user(&self, like_id: i32, user_id: i32) -> Result<(), RepoError> {
        link_user_like(self.conn(), user_id, like_id).await
    }

    async fn remove_user(&self, like_id: i32, user_id: i32) -> Result<(), RepoError> {
        unlink_user_like(self.conn(), user_id, like_id).await
    }
}
