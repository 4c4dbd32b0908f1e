//! Like entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use social_core::EntityKind;
use social_core::domain::{Like, NewLike};

use super::MappedEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reaction_type: String,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_like::Entity")]
    UserLike,
}

impl Related<super::user_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLike.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_like::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_like::Relation::Like.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Record = Like;
    type Draft = NewLike;

    const KIND: EntityKind = EntityKind::Like;
}

impl From<Model> for Like {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            reaction_type: model.reaction_type,
            created_at: model.created_at,
        }
    }
}

impl From<Like> for ActiveModel {
    fn from(like: Like) -> Self {
        Self {
            id: Set(like.id),
            reaction_type: Set(like.reaction_type),
            created_at: Set(like.created_at),
        }
    }
}

impl From<NewLike> for ActiveModel {
    fn from(draft: NewLike) -> Self {
        Self {
            id: NotSet,
            reaction_type: Set(draft.reaction_type),
            created_at: Set(draft.created_at),
        }
    }
}
