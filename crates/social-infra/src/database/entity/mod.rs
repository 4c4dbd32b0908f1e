//! sea-orm entities and the association graph between them.
//!
//! The `Relation`/`Related` impls here mirror `social_core::ASSOCIATIONS`:
//! users own one profile and many posts, posts own many comments, and users
//! and likes meet through the `user_like` join table.

pub mod comment;
pub mod like;
pub mod post;
pub mod profile;
pub mod user;
pub mod user_like;

use sea_orm::EntityTrait;
use social_core::EntityKind;
use social_core::domain::Validate;

/// Ties a sea-orm entity to its domain record and draft.
pub trait MappedEntity: EntityTrait {
    type Record: From<Self::Model> + Into<Self::ActiveModel> + Validate + Send + Sync + 'static;
    type Draft: Into<Self::ActiveModel> + Validate + Send + Sync + 'static;

    const KIND: EntityKind;
}
