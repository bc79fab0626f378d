use async_trait::async_trait;

use crate::domain::pagination::Page;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Actor;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::ListUsersQuery;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// List users matching the query with pagination.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self, query: ListUsersQuery) -> Result<Page<User>, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Create new user on behalf of an administrator.
    ///
    /// New accounts default to PENDING status and are inactive until
    /// explicitly activated.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (checked first)
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Update existing user with optional fields.
    ///
    /// Non-admin actors may only update themselves and cannot change
    /// roles; role changes from non-admins are silently dropped.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `NotResourceOwner` - Actor is neither admin nor the target user
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        actor: Actor,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Transition a user to ACTIVE status.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `AlreadyActive` - User is already active
    /// * `DatabaseError` - Database operation failed
    async fn activate_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `CannotDeleteSelf` - Actor attempted to delete their own account
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, actor: Actor, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve one page of users matching the query, plus the total count.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, query: &ListUsersQuery) -> Result<Page<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
