use async_trait::async_trait;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::models::ListAuthorsQuery;
use crate::domain::author::models::UpdateAuthorCommand;
use crate::domain::pagination::Page;

/// Port for author domain service operations.
#[async_trait]
pub trait AuthorServicePort: Send + Sync + 'static {
    /// List authors matching the query with pagination.
    async fn list_authors(&self, query: ListAuthorsQuery) -> Result<Page<Author>, AuthorError>;

    /// Retrieve author by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    /// Create new author.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - An author with this name already exists
    async fn create_author(&self, command: CreateAuthorCommand) -> Result<Author, AuthorError>;

    /// Update existing author with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `NameAlreadyExists` - New name is already taken
    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Author, AuthorError>;

    /// Mark an author active.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `AlreadyActive` - Author is already active
    async fn activate_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    /// Mark an author inactive.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `AlreadyInactive` - Author is already inactive
    async fn deactivate_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    /// Delete existing author.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn delete_author(&self, id: &AuthorId) -> Result<(), AuthorError>;
}

/// Persistence operations for the author aggregate.
#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    /// Persist new author to storage.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - An author with this name already exists
    async fn create(&self, author: Author) -> Result<Author, AuthorError>;

    /// Retrieve author by identifier.
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;

    /// Retrieve author by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, AuthorError>;

    /// Retrieve one page of authors matching the query, plus the total count.
    async fn list(&self, query: &ListAuthorsQuery) -> Result<Page<Author>, AuthorError>;

    /// Update existing author in storage.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `NameAlreadyExists` - New name is already taken
    async fn update(&self, author: Author) -> Result<Author, AuthorError>;

    /// Remove author from storage.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError>;
}
