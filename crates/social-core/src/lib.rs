//! # Social Core
//!
//! The domain layer of the social model.
//! Records, seed drafts, the association descriptor and the repository ports.
//! This crate has zero database dependencies.

pub mod associations;
pub mod domain;
pub mod error;
pub mod ports;

pub use associations::{
    ASSOCIATIONS, Association, Cardinality, EntityKind, JoinTable, Link, USER_LIKE,
};
pub use error::{DomainError, RepoError};
