use thiserror::Error;

/// Error for AuthorId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all author-related operations
#[derive(Debug, Clone, Error)]
pub enum AuthorError {
    #[error("Invalid author ID: {0}")]
    InvalidAuthorId(#[from] AuthorIdError),

    #[error("Author not found")]
    NotFound,

    #[error("Author with this name already exists")]
    NameAlreadyExists,

    #[error("Author is already active")]
    AlreadyActive,

    #[error("Author is already inactive")]
    AlreadyInactive,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
