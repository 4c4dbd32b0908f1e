//! Comment entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use social_core::EntityKind;
use social_core::domain::{Comment, NewComment};

use super::MappedEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Record = Comment;
    type Draft = NewComment;

    const KIND: EntityKind = EntityKind::Comment;
}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            body: model.body,
            created_at: model.created_at,
        }
    }
}

impl From<Comment> for ActiveModel {
    fn from(comment: Comment) -> Self {
        Self {
            id: Set(comment.id),
            post_id: NotSet,
            body: Set(comment.body),
            created_at: Set(comment.created_at),
        }
    }
}

impl From<NewComment> for ActiveModel {
    fn from(draft: NewComment) -> Self {
        Self {
            id: NotSet,
            post_id: Set(None),
            body: Set(draft.body),
            created_at: Set(draft.created_at),
        }
    }
}
