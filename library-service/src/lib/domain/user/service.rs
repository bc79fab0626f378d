use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::pagination::Page;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Actor;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::ListUsersQuery;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserStatus;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: Arc<PasswordHasher>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    // bcrypt is CPU-bound; run it off the async runtime.
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Hashing(e.to_string()))?
            .map_err(|e| UserError::Hashing(e.to_string()))
    }

    async fn ensure_email_free(&self, email: &str) -> Result<(), UserError> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists);
        }
        Ok(())
    }

    async fn ensure_username_free(&self, username: &Username) -> Result<(), UserError> {
        if self.repository.find_by_username(username).await?.is_some() {
            return Err(UserError::UsernameAlreadyExists);
        }
        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn list_users(&self, query: ListUsersQuery) -> Result<Page<User>, UserError> {
        self.repository.list(&query).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Email collision is reported before username collision.
        self.ensure_email_free(command.email.as_str()).await?;
        self.ensure_username_free(&command.username).await?;

        let password_hash = self.hash_password(command.password).await?;
        let now = Utc::now();

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            full_name: command.full_name,
            phone_number: command.phone_number,
            role: command.role.unwrap_or(Role::User),
            status: command.status.unwrap_or(UserStatus::Pending),
            is_active: false,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    async fn update_user(
        &self,
        actor: Actor,
        id: &UserId,
        mut command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        // Users can only update themselves, admins can update anyone.
        if !actor.is_admin() && actor.user_id != *id {
            return Err(UserError::NotResourceOwner);
        }

        // Role changes are an admin privilege; drop them silently otherwise.
        if !actor.is_admin() {
            command.role = None;
        }

        if let Some(new_email) = &command.email {
            if new_email != &user.email {
                self.ensure_email_free(new_email.as_str()).await?;
            }
        }

        if let Some(new_username) = &command.username {
            if new_username != &user.username {
                self.ensure_username_free(new_username).await?;
            }
        }

        if let Some(new_username) = command.username {
            user.username = new_username;
        }
        if let Some(new_email) = command.email {
            user.email = new_email;
        }
        if let Some(new_password) = command.password {
            user.password_hash = self.hash_password(new_password).await?;
        }
        if let Some(full_name) = command.full_name {
            user.full_name = Some(full_name);
        }
        if let Some(phone_number) = command.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(role) = command.role {
            user.role = role;
        }
        if let Some(status) = command.status {
            user.status = status;
        }
        if let Some(is_active) = command.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Utc::now();

        self.repository.update(user).await
    }

    async fn activate_user(&self, id: &UserId) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        if user.is_active && user.status == UserStatus::Active {
            return Err(UserError::AlreadyActive);
        }

        user.status = UserStatus::Active;
        user.is_active = true;
        user.updated_at = Utc::now();

        self.repository.update(user).await
    }

    async fn delete_user(&self, actor: Actor, id: &UserId) -> Result<(), UserError> {
        if actor.user_id == *id {
            return Err(UserError::CannotDeleteSelf);
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        self.repository.delete(id).await
    }
}
