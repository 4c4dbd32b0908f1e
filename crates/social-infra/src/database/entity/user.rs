//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use social_core::EntityKind;
use social_core::domain::{NewUser, User};

use super::MappedEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::user_like::Entity")]
    UserLike,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::user_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLike.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_like::Relation::Like.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_like::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Record = User;
    type Draft = NewUser;

    const KIND: EntityKind = EntityKind::User;
}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        Self {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
        }
    }
}

impl From<NewUser> for ActiveModel {
    fn from(draft: NewUser) -> Self {
        Self {
            id: NotSet,
            username: Set(draft.username),
            email: Set(draft.email),
        }
    }
}
