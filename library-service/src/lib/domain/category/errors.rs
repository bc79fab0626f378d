use thiserror::Error;

/// Error for CategoryId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all category-related operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] CategoryIdError),

    #[error("Category not found")]
    NotFound,

    #[error("Category with this name already exists")]
    NameAlreadyExists,

    #[error("Category is already active")]
    AlreadyActive,

    #[error("Category is already inactive")]
    AlreadyInactive,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
