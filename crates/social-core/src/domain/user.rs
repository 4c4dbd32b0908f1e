use serde::{Deserialize, Serialize};

use super::{Validate, require};
use crate::error::DomainError;

/// User entity - an account that owns a profile, posts and likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// A user as it appears in seed data, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

fn check_user(username: &str, email: &str) -> Result<(), DomainError> {
    require("username", username)?;
    require("email", email)?;
    if !email.contains('@') {
        return Err(DomainError::Validation(format!(
            "email '{email}' is missing an '@'"
        )));
    }
    Ok(())
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), DomainError> {
        check_user(&self.username, &self.email)
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), DomainError> {
        check_user(&self.username, &self.email)
    }
}
