use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::author::errors::AuthorIdError;

/// Author aggregate entity.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub Uuid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an author ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AuthorIdError> {
        Uuid::parse_str(s)
            .map(AuthorId)
            .map_err(|e| AuthorIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new author
#[derive(Debug)]
pub struct CreateAuthorCommand {
    pub name: String,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub is_active: Option<bool>,
}

/// Command to update an existing author; only provided fields change.
#[derive(Debug, Default)]
pub struct UpdateAuthorCommand {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters and paging for author listings.
#[derive(Debug, Clone, Default)]
pub struct ListAuthorsQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}
