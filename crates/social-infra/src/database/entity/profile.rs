//! Profile entity for SeaORM. Owns the foreign key of the one-to-one user link.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use social_core::EntityKind;
use social_core::domain::{NewProfile, Profile};

use super::MappedEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub birthday: Option<String>,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Record = Profile;
    type Draft = NewProfile;

    const KIND: EntityKind = EntityKind::Profile;
}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            bio: model.bio,
            profile_picture: model.profile_picture,
            birthday: model.birthday,
        }
    }
}

/// The user link is left unset; only the association accessors move it.
impl From<Profile> for ActiveModel {
    fn from(profile: Profile) -> Self {
        Self {
            id: Set(profile.id),
            user_id: NotSet,
            bio: Set(profile.bio),
            profile_picture: Set(profile.profile_picture),
            birthday: Set(profile.birthday),
        }
    }
}

/// Drafts are inserted unlinked; the user is attached afterwards.
impl From<NewProfile> for ActiveModel {
    fn from(draft: NewProfile) -> Self {
        Self {
            id: NotSet,
            user_id: Set(None),
            bio: Set(draft.bio),
            profile_picture: Set(draft.profile_picture),
            birthday: Set(draft.birthday),
        }
    }
}
