use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedSession;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for the authentication flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account and open its first session.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email collides (checked before username)
    /// * `UsernameAlreadyTaken` - Username collides
    /// * `WeakPassword` - Password fails the strength policy
    async fn register(&self, command: RegisterCommand) -> Result<AuthenticatedSession, AuthError>;

    /// Authenticate credentials and open a session.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password, or
    ///   inactive account; the error is identical in every case
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AuthError>;

    /// Redeem a refresh token for a new pair, consuming it.
    ///
    /// Each refresh token is valid for exactly one successful call.
    ///
    /// # Errors
    /// * `BadToken` - Token invalid, unknown, already revoked, or expired
    /// * `AccountUnavailable` - Owning account no longer active
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Close a session.
    ///
    /// With a token, revokes that record (no-op when unknown); without
    /// one, revokes every live record of the authenticated user. Never
    /// fails for an unknown token.
    async fn logout(
        &self,
        refresh_token: Option<&str>,
        user_id: Option<UserId>,
    ) -> Result<(), AuthError>;

    /// Fetch the authenticated user's own record.
    ///
    /// # Errors
    /// * `AccountUnavailable` - User no longer exists
    async fn profile(&self, user_id: &UserId) -> Result<User, AuthError>;
}
