use serde::{Deserialize, Serialize};

use super::{Validate, check_timestamp, require};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub post_id: Option<i32>,
    pub body: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub body: String,
    pub created_at: Option<String>,
}

impl NewComment {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            created_at: None,
        }
    }

    pub fn at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }
}

impl Validate for NewComment {
    fn validate(&self) -> Result<(), DomainError> {
        require("body", &self.body)?;
        check_timestamp("createdAt", self.created_at.as_deref())
    }
}

impl Validate for Comment {
    fn validate(&self) -> Result<(), DomainError> {
        require("body", &self.body)?;
        check_timestamp("createdAt", self.created_at.as_deref())
    }
}
