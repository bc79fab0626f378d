use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::models::RefreshTokenId;
use crate::domain::session::models::RefreshTokenRecord;
use crate::domain::user::models::UserId;

/// Error for session ledger operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence operations for issued refresh tokens.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Persist a new live record.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, SessionError>;

    /// Exact match on token string and owning user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_token_and_user(
        &self,
        token: &str,
        user_id: &UserId,
    ) -> Result<Option<RefreshTokenRecord>, SessionError>;

    /// Exact match on token string alone.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, SessionError>;

    /// Mark a record revoked. Idempotent: revoking twice is a no-op.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn revoke(&self, id: &RefreshTokenId) -> Result<(), SessionError>;

    /// Atomically revoke the record iff it has not been revoked yet.
    ///
    /// Returns whether this call performed the transition. Under
    /// concurrent rotation attempts on one token, exactly one caller
    /// observes `true`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn revoke_if_live(&self, id: &RefreshTokenId) -> Result<bool, SessionError>;

    /// Mark every live record owned by the user revoked.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn revoke_all_for_user(&self, user_id: &UserId) -> Result<(), SessionError>;
}
