//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use social_core::EntityKind;
use social_core::domain::{NewPost, Post};

use super::MappedEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Record = Post;
    type Draft = NewPost;

    const KIND: EntityKind = EntityKind::Post;
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            body: model.body,
            created_at: model.created_at,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
/// Record updates never touch the owner column; use the accessors.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            user_id: NotSet,
            title: Set(post.title),
            body: Set(post.body),
            created_at: Set(post.created_at),
        }
    }
}

impl From<NewPost> for ActiveModel {
    fn from(draft: NewPost) -> Self {
        Self {
            id: NotSet,
            user_id: Set(None),
            title: Set(draft.title),
            body: Set(draft.body),
            created_at: Set(draft.created_at),
        }
    }
}
