use serde::{Deserialize, Serialize};

use super::{Validate, check_date, require};
use crate::error::DomainError;

/// Profile entity - biography details belonging to at most one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub user_id: Option<i32>,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub bio: String,
    pub profile_picture: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub birthday: Option<String>,
}

impl NewProfile {
    pub fn new(bio: impl Into<String>) -> Self {
        Self {
            bio: bio.into(),
            profile_picture: None,
            birthday: None,
        }
    }

    pub fn with_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    pub fn with_birthday(mut self, date: impl Into<String>) -> Self {
        self.birthday = Some(date.into());
        self
    }
}

fn check_profile(
    bio: &str,
    profile_picture: Option<&str>,
    birthday: Option<&str>,
) -> Result<(), DomainError> {
    require("bio", bio)?;
    if let Some(url) = profile_picture {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DomainError::Validation(format!(
                "profilePicture '{url}' is not an http(s) URL"
            )));
        }
    }
    check_date("birthday", birthday)
}

impl Validate for NewProfile {
    fn validate(&self) -> Result<(), DomainError> {
        check_profile(
            &self.bio,
            self.profile_picture.as_deref(),
            self.birthday.as_deref(),
        )
    }
}

impl Validate for Profile {
    fn validate(&self) -> Result<(), DomainError> {
        check_profile(
            &self.bio,
            self.profile_picture.as_deref(),
            self.birthday.as_deref(),
        )
    }
}
