use serde::{Deserialize, Serialize};

use super::{Validate, check_timestamp, require};
use crate::error::DomainError;

/// Post entity - represents a post written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: Option<i32>,
    pub title: String,
    pub body: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub created_at: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at: None,
        }
    }
}

fn check_post(title: &str, body: &str, created_at: Option<&str>) -> Result<(), DomainError> {
    require("title", title)?;
    require("body", body)?;
    check_timestamp("createdAt", created_at)
}

impl Validate for NewPost {
    fn validate(&self) -> Result<(), DomainError> {
        check_post(&self.title, &self.body, self.created_at.as_deref())
    }
}

impl Validate for Post {
    fn validate(&self) -> Result<(), DomainError> {
        check_post(&self.title, &self.body, self.created_at.as_deref())
    }
}
