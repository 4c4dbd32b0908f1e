//! Domain entities - the persisted records and the drafts they are created from.

mod comment;
mod like;
mod post;
mod profile;
mod user;

pub use comment::{Comment, NewComment};
pub use like::{Like, NewLike};
pub use post::{NewPost, Post};
pub use profile::{NewProfile, Profile};
pub use user::{NewUser, User};

use chrono::{DateTime, NaiveDate};

use crate::error::DomainError;

/// Checks a draft or record before it is written.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Timestamps are stored as text but must be RFC 3339.
pub(crate) fn check_timestamp(field: &str, value: Option<&str>) -> Result<(), DomainError> {
    match value {
        Some(ts) => DateTime::parse_from_rfc3339(ts)
            .map(|_| ())
            .map_err(|e| DomainError::Validation(format!("{field} '{ts}' is not RFC 3339: {e}"))),
        None => Ok(()),
    }
}

pub(crate) fn check_date(field: &str, value: Option<&str>) -> Result<(), DomainError> {
    match value {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|e| DomainError::Validation(format!("{field} '{date}' is not YYYY-MM-DD: {e}"))),
        None => Ok(()),
    }
}
