use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<Role>,
}

/// Command to authenticate with credentials.
///
/// The email is deliberately kept as a raw string: a malformed email must
/// fail exactly like an unknown one.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful register or login.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}
