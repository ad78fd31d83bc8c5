//! Request DTOs for Web API.

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::Validate;

use crate::board::validation::not_blank;
use crate::board::{NewBoardEntry, MAX_AUTHOR_LENGTH, MAX_TITLE_LENGTH};

/// Board entry creation request.
///
/// Fields are optional at the type level so that a missing field is reported
/// as a validation error alongside any other field problems, instead of
/// failing deserialization. String values are trimmed before validation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBoardRequest {
    /// Post title (at most 100 characters).
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        required,
        custom(function = "not_blank"),
        length(max = MAX_TITLE_LENGTH)
    )]
    #[schema(example = "Hello")]
    pub title: Option<String>,
    /// Post body.
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(required, custom(function = "not_blank"))]
    #[schema(example = "World")]
    pub content: Option<String>,
    /// Author name (at most 50 characters).
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        required,
        custom(function = "not_blank"),
        length(max = MAX_AUTHOR_LENGTH)
    )]
    #[schema(example = "Alice")]
    pub author: Option<String>,
}

fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()))
}

impl From<CreateBoardRequest> for NewBoardEntry {
    fn from(req: CreateBoardRequest) -> Self {
        NewBoardEntry::new(
            req.title.unwrap_or_default(),
            req.content.unwrap_or_default(),
            req.author.unwrap_or_default(),
        )
    }
}
