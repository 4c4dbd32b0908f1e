use serde::{Deserialize, Serialize};

use super::{Validate, check_timestamp, require};
use crate::error::DomainError;

/// Like entity - a reaction that any number of users may hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: i32,
    /// Usually a single emoji such as "👍".
    pub reaction_type: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLike {
    pub reaction_type: String,
    pub created_at: Option<String>,
}

impl NewLike {
    pub fn new(reaction_type: impl Into<String>) -> Self {
        Self {
            reaction_type: reaction_type.into(),
            created_at: None,
        }
    }
}

impl Validate for NewLike {
    fn validate(&self) -> Result<(), DomainError> {
        require("reactionType", &self.reaction_type)?;
        check_timestamp("createdAt", self.created_at.as_deref())
    }
}

impl Validate for Like {
    fn validate(&self) -> Result<(), DomainError> {
        require("reactionType", &self.reaction_type)?;
        check_timestamp("createdAt", self.created_at.as_deref())
    }
}
