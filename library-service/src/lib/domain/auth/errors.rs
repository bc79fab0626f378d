use thiserror::Error;

use crate::domain::session::ports::SessionError;
use crate::domain::user::errors::UserError;

/// Top-level error for authentication flows
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Username already taken")]
    UsernameAlreadyTaken,

    #[error("{0}")]
    WeakPassword(String),

    /// Wrong email, wrong password, and inactive accounts all collapse
    /// into this one message so callers cannot enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found or inactive")]
    AccountUnavailable,

    #[error("{0}")]
    BadToken(String),

    #[error("Password processing failed: {0}")]
    Password(String),

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error(transparent)]
    User(UserError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists => AuthError::EmailAlreadyRegistered,
            UserError::UsernameAlreadyExists => AuthError::UsernameAlreadyTaken,
            other => AuthError::User(other),
        }
    }
}
