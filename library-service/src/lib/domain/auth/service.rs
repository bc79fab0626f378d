use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::PasswordPolicy;
use auth::TokenCodec;
use auth::TokenKind;
use auth::TokenPair;
use auth::TokenPayload;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedSession;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::session::models::RefreshTokenRecord;
use crate::domain::session::ports::RefreshTokenRepository;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserStatus;
use crate::domain::user::ports::UserRepository;

/// Authentication flow orchestrator.
///
/// Composes credential checks, token minting, and the refresh-token
/// ledger into the register/login/refresh/logout lifecycle. Holds no
/// state of its own; every session fact lives in the ledger.
pub struct AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    users: Arc<UR>,
    sessions: Arc<RR>,
    password_hasher: Arc<PasswordHasher>,
    token_codec: Arc<TokenCodec>,
    refresh_ttl: Duration,
}

impl<UR, RR> AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `sessions` - Refresh token ledger implementation
    /// * `password_hasher` - Credential hashing implementation
    /// * `token_codec` - Token minting/verification implementation
    /// * `refresh_ttl` - Lifetime recorded for issued refresh tokens
    pub fn new(
        users: Arc<UR>,
        sessions: Arc<RR>,
        password_hasher: Arc<PasswordHasher>,
        token_codec: Arc<TokenCodec>,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            password_hasher,
            token_codec,
            refresh_ttl,
        }
    }

    fn token_payload(user: &User) -> TokenPayload {
        TokenPayload {
            user_id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.to_string(),
        }
    }

    // bcrypt is CPU-bound; run it off the async runtime.
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Password(e.to_string()))?
            .map_err(|e| AuthError::Password(e.to_string()))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Password(e.to_string()))?
            .map_err(|e| AuthError::Password(e.to_string()))
    }

    /// Mint a pair for the user and record the refresh half in the ledger.
    async fn open_session(&self, user: &User) -> Result<TokenPair, AuthError> {
        let pair = self
            .token_codec
            .mint_pair(&Self::token_payload(user))
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;

        let record = RefreshTokenRecord::new(
            pair.refresh_token.clone(),
            user.id,
            Utc::now() + self.refresh_ttl,
        );
        self.sessions.create(record).await?;

        Ok(pair)
    }
}

#[async_trait]
impl<UR, RR> AuthServicePort for AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthenticatedSession, AuthError> {
        // Email collision is reported before username collision.
        if self
            .users
            .find_by_email(command.email.as_str())
            .await
            .map_err(AuthError::from)?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        if self
            .users
            .find_by_username(&command.username)
            .await
            .map_err(AuthError::from)?
            .is_some()
        {
            return Err(AuthError::UsernameAlreadyTaken);
        }

        PasswordPolicy::validate(&command.password)
            .map_err(|errors| AuthError::WeakPassword(errors.join(", ")))?;

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
            status: UserStatus::Active,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.create(user).await.map_err(AuthError::from)?;
        let pair = self.open_session(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthenticatedSession {
            user,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AuthError> {
        let user = self
            .users
            .find_by_email(&command.email)
            .await
            .map_err(AuthError::from)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.can_authenticate() {
            return Err(AuthError::InvalidCredentials);
        }

        let password_matches = self
            .verify_password(command.password, user.password_hash.clone())
            .await?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.open_session(&user).await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedSession {
            user,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let payload = self
            .token_codec
            .verify(refresh_token, TokenKind::Refresh)
            .map_err(|_| AuthError::BadToken("Invalid or expired refresh token".to_string()))?;

        let user_id = UserId::from_string(&payload.user_id)
            .map_err(|_| AuthError::BadToken("Invalid or expired refresh token".to_string()))?;

        let record = self
            .sessions
            .find_by_token_and_user(refresh_token, &user_id)
            .await?
            .ok_or_else(|| {
                AuthError::BadToken("Refresh token not found or revoked".to_string())
            })?;

        if record.is_revoked {
            return Err(AuthError::BadToken(
                "Refresh token not found or revoked".to_string(),
            ));
        }

        if record.expires_at <= Utc::now() {
            // Lazy expiry: the first redemption attempt retires the record.
            self.sessions.revoke(&record.id).await?;
            return Err(AuthError::BadToken(
                "Refresh token has expired".to_string(),
            ));
        }

        let user = self
            .users
            .find_by_id(&user_id)
            .await
            .map_err(AuthError::from)?
            .ok_or(AuthError::AccountUnavailable)?;
        if !user.can_authenticate() {
            return Err(AuthError::AccountUnavailable);
        }

        let pair = self
            .token_codec
            .mint_pair(&Self::token_payload(&user))
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;

        // Single-use rotation: only the caller that actually flips the
        // record may hand out the new pair.
        if !self.sessions.revoke_if_live(&record.id).await? {
            return Err(AuthError::BadToken(
                "Refresh token not found or revoked".to_string(),
            ));
        }

        let new_record = RefreshTokenRecord::new(
            pair.refresh_token.clone(),
            user.id,
            Utc::now() + self.refresh_ttl,
        );
        self.sessions.create(new_record).await?;

        tracing::debug!(user_id = %user.id, "Refresh token rotated");

        Ok(pair)
    }

    async fn logout(
        &self,
        refresh_token: Option<&str>,
        user_id: Option<UserId>,
    ) -> Result<(), AuthError> {
        if let Some(token) = refresh_token {
            if let Some(record) = self.sessions.find_by_token(token).await? {
                self.sessions.revoke(&record.id).await?;
            }
        } else if let Some(user_id) = user_id {
            self.sessions.revoke_all_for_user(&user_id).await?;
        }

        Ok(())
    }

    async fn profile(&self, user_id: &UserId) -> Result<User, AuthError> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(AuthError::from)?
            .ok_or(AuthError::AccountUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::pagination::Page;
    use crate::domain::session::models::RefreshTokenId;
    use crate::domain::session::ports::SessionError;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::ListUsersQuery;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list(&self, query: &ListUsersQuery) -> Result<Page<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    mock! {
        pub TestRefreshTokenRepository {}

        #[async_trait]
        impl RefreshTokenRepository for TestRefreshTokenRepository {
            async fn create(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, SessionError>;
            async fn find_by_token_and_user(
                &self,
                token: &str,
                user_id: &UserId,
            ) -> Result<Option<RefreshTokenRecord>, SessionError>;
            async fn find_by_token(&self, token: &str) -> Result<Option<RefreshTokenRecord>, SessionError>;
            async fn revoke(&self, id: &RefreshTokenId) -> Result<(), SessionError>;
            async fn revoke_if_live(&self, id: &RefreshTokenId) -> Result<bool, SessionError>;
            async fn revoke_all_for_user(&self, user_id: &UserId) -> Result<(), SessionError>;
        }
    }

    const ACCESS_SECRET: &[u8] = b"test_access_secret_32_bytes_long!!!!!";
    const REFRESH_SECRET: &[u8] = b"test_refresh_secret_32_bytes_long!!!!";

    fn codec() -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(
            ACCESS_SECRET,
            REFRESH_SECRET,
            Duration::minutes(15),
            Duration::days(7),
        ))
    }

    fn hasher() -> Arc<PasswordHasher> {
        Arc::new(PasswordHasher::new(4))
    }

    fn service(
        users: MockTestUserRepository,
        sessions: MockTestRefreshTokenRepository,
    ) -> AuthService<MockTestUserRepository, MockTestRefreshTokenRepository> {
        AuthService::new(
            Arc::new(users),
            Arc::new(sessions),
            hasher(),
            codec(),
            Duration::days(7),
        )
    }

    fn active_user(password: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@x.com".to_string()).unwrap(),
            password_hash: PasswordHasher::new(4).hash(password).unwrap(),
            full_name: None,
            phone_number: None,
            role: Role::User,
            status: UserStatus::Active,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn register_command() -> RegisterCommand {
        RegisterCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@x.com".to_string()).unwrap(),
            password: "Password123".to_string(),
            full_name: None,
            phone_number: None,
            role: None,
        }
    }

    fn live_record(user: &User, token: &str) -> RefreshTokenRecord {
        RefreshTokenRecord::new(token.to_string(), user.id, Utc::now() + Duration::days(7))
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();

        users.expect_find_by_email().times(1).returning(|_| Ok(None));
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|user| {
                user.status == UserStatus::Active
                    && user.is_active
                    && user.role == Role::User
                    && user.password_hash.starts_with("$2")
                    && user.password_hash != "Password123"
            })
            .times(1)
            .returning(|user| Ok(user));
        sessions
            .expect_create()
            .withf(|record| !record.is_revoked && record.expires_at > Utc::now())
            .times(1)
            .returning(|record| Ok(record));

        let session = service(users, sessions)
            .register(register_command())
            .await
            .expect("Registration failed");

        assert!(!session.access_token.is_empty());
        assert!(!session.refresh_token.is_empty());
        assert_ne!(session.access_token, session.refresh_token);

        // Both halves of the pair decode back to the registered identity.
        let codec = codec();
        let payload = codec
            .verify(&session.access_token, TokenKind::Access)
            .unwrap();
        assert_eq!(payload.user_id, session.user.id.to_string());
        assert_eq!(payload.email, "alice@x.com");
        codec
            .verify(&session.refresh_token, TokenKind::Refresh)
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_duplicate_email_checked_first() {
        let mut users = MockTestUserRepository::new();
        let sessions = MockTestRefreshTokenRepository::new();

        // Both collide; the email error must win and the username check
        // must not even run.
        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(active_user("Password123"))));
        users.expect_find_by_username().times(0);
        users.expect_create().times(0);

        let result = service(users, sessions).register(register_command()).await;
        let err = result.unwrap_err();
        assert!(matches!(err, AuthError::EmailAlreadyRegistered));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut users = MockTestUserRepository::new();
        let sessions = MockTestRefreshTokenRepository::new();

        users.expect_find_by_email().times(1).returning(|_| Ok(None));
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(active_user("Password123"))));
        users.expect_create().times(0);

        let result = service(users, sessions).register(register_command()).await;
        let err = result.unwrap_err();
        assert!(matches!(err, AuthError::UsernameAlreadyTaken));
        assert_eq!(err.to_string(), "Username already taken");
    }

    #[tokio::test]
    async fn test_register_weak_password() {
        let mut users = MockTestUserRepository::new();
        let sessions = MockTestRefreshTokenRepository::new();

        users.expect_find_by_email().times(1).returning(|_| Ok(None));
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        users.expect_create().times(0);

        let mut command = register_command();
        command.password = "short".to_string();

        let result = service(users, sessions).register(command).await;
        match result.unwrap_err() {
            AuthError::WeakPassword(message) => {
                assert!(message.contains("at least 8 characters"));
            }
            other => panic!("Expected WeakPassword, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_new_pair() {
        let user = active_user("Password123");
        let user_clone = user.clone();

        let mut users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();

        users
            .expect_find_by_email()
            .with(eq("alice@x.com"))
            .times(1)
            .returning(move |_| Ok(Some(user_clone.clone())));
        sessions
            .expect_create()
            .times(1)
            .returning(|record| Ok(record));

        let session = service(users, sessions)
            .login(LoginCommand {
                email: "alice@x.com".to_string(),
                password: "Password123".to_string(),
            })
            .await
            .expect("Login failed");

        assert_eq!(session.user.id, user.id);
        assert!(!session.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        // Unknown email
        let mut users = MockTestUserRepository::new();
        users.expect_find_by_email().times(1).returning(|_| Ok(None));
        let unknown_err = service(users, MockTestRefreshTokenRepository::new())
            .login(LoginCommand {
                email: "ghost@x.com".to_string(),
                password: "Password123".to_string(),
            })
            .await
            .unwrap_err();

        // Wrong password
        let user = active_user("Password123");
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        let wrong_password_err = service(users, MockTestRefreshTokenRepository::new())
            .login(LoginCommand {
                email: "alice@x.com".to_string(),
                password: "WrongPassword".to_string(),
            })
            .await
            .unwrap_err();

        // Inactive account, correct password
        let mut inactive = active_user("Password123");
        inactive.is_active = false;
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(inactive.clone())));
        let inactive_err = service(users, MockTestRefreshTokenRepository::new())
            .login(LoginCommand {
                email: "alice@x.com".to_string(),
                password: "Password123".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(unknown_err.to_string(), "Invalid email or password");
        assert_eq!(unknown_err.to_string(), wrong_password_err.to_string());
        assert_eq!(unknown_err.to_string(), inactive_err.to_string());
    }

    #[tokio::test]
    async fn test_login_suspended_status_rejected() {
        let mut user = active_user("Password123");
        user.status = UserStatus::Suspended;

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let err = service(users, MockTestRefreshTokenRepository::new())
            .login(LoginCommand {
                email: "alice@x.com".to_string(),
                password: "Password123".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_refresh_rotates_token() {
        let user = active_user("Password123");
        let token = codec()
            .mint(
                &TokenPayload {
                    user_id: user.id.to_string(),
                    email: user.email.as_str().to_string(),
                    role: user.role.to_string(),
                },
                TokenKind::Refresh,
            )
            .unwrap();

        let record = live_record(&user, &token);
        let record_id = record.id;
        let user_clone = user.clone();

        let mut users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();

        sessions
            .expect_find_by_token_and_user()
            .withf({
                let token = token.clone();
                let user_id = user.id;
                move |t, u| t == token && *u == user_id
            })
            .times(1)
            .returning(move |_, _| Ok(Some(record.clone())));
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user_clone.clone())));
        sessions
            .expect_revoke_if_live()
            .withf(move |id| *id == record_id)
            .times(1)
            .returning(|_| Ok(true));
        sessions
            .expect_create()
            .withf(|record| !record.is_revoked)
            .times(1)
            .returning(|record| Ok(record));

        let pair = service(users, sessions)
            .refresh(&token)
            .await
            .expect("Refresh failed");

        assert_ne!(pair.refresh_token, token);
        codec()
            .verify(&pair.refresh_token, TokenKind::Refresh)
            .unwrap();
    }

    #[tokio::test]
    async fn test_refresh_rejects_revoked_record() {
        let user = active_user("Password123");
        let token = codec()
            .mint(
                &TokenPayload {
                    user_id: user.id.to_string(),
                    email: user.email.as_str().to_string(),
                    role: user.role.to_string(),
                },
                TokenKind::Refresh,
            )
            .unwrap();

        let mut record = live_record(&user, &token);
        record.is_revoked = true;

        let users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_find_by_token_and_user()
            .times(1)
            .returning(move |_, _| Ok(Some(record.clone())));
        sessions.expect_create().times(0);

        let err = service(users, sessions).refresh(&token).await.unwrap_err();
        assert_eq!(err.to_string(), "Refresh token not found or revoked");
    }

    #[tokio::test]
    async fn test_refresh_rejects_unknown_record() {
        let user = active_user("Password123");
        let token = codec()
            .mint(
                &TokenPayload {
                    user_id: user.id.to_string(),
                    email: user.email.as_str().to_string(),
                    role: user.role.to_string(),
                },
                TokenKind::Refresh,
            )
            .unwrap();

        let users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_find_by_token_and_user()
            .times(1)
            .returning(|_, _| Ok(None));

        let err = service(users, sessions).refresh(&token).await.unwrap_err();
        assert_eq!(err.to_string(), "Refresh token not found or revoked");
    }

    #[tokio::test]
    async fn test_refresh_expired_record_is_lazily_revoked() {
        let user = active_user("Password123");
        let token = codec()
            .mint(
                &TokenPayload {
                    user_id: user.id.to_string(),
                    email: user.email.as_str().to_string(),
                    role: user.role.to_string(),
                },
                TokenKind::Refresh,
            )
            .unwrap();

        // Signature still valid, but the ledger entry is past its expiry.
        let mut record = live_record(&user, &token);
        record.expires_at = Utc::now() - Duration::hours(1);
        let record_id = record.id;

        let users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_find_by_token_and_user()
            .times(1)
            .returning(move |_, _| Ok(Some(record.clone())));
        sessions
            .expect_revoke()
            .withf(move |id| *id == record_id)
            .times(1)
            .returning(|_| Ok(()));
        sessions.expect_create().times(0);

        let err = service(users, sessions).refresh(&token).await.unwrap_err();
        assert_eq!(err.to_string(), "Refresh token has expired");
    }

    #[tokio::test]
    async fn test_refresh_lost_race_yields_no_pair() {
        let user = active_user("Password123");
        let token = codec()
            .mint(
                &TokenPayload {
                    user_id: user.id.to_string(),
                    email: user.email.as_str().to_string(),
                    role: user.role.to_string(),
                },
                TokenKind::Refresh,
            )
            .unwrap();

        let record = live_record(&user, &token);
        let user_clone = user.clone();

        let mut users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_find_by_token_and_user()
            .times(1)
            .returning(move |_, _| Ok(Some(record.clone())));
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user_clone.clone())));
        // A concurrent rotation won the conditional update.
        sessions
            .expect_revoke_if_live()
            .times(1)
            .returning(|_| Ok(false));
        sessions.expect_create().times(0);

        let err = service(users, sessions).refresh(&token).await.unwrap_err();
        assert_eq!(err.to_string(), "Refresh token not found or revoked");
    }

    #[tokio::test]
    async fn test_refresh_rejects_inactive_account() {
        let mut user = active_user("Password123");
        let token = codec()
            .mint(
                &TokenPayload {
                    user_id: user.id.to_string(),
                    email: user.email.as_str().to_string(),
                    role: user.role.to_string(),
                },
                TokenKind::Refresh,
            )
            .unwrap();
        user.is_active = false;

        let record = live_record(&user, &token);
        let user_clone = user.clone();

        let mut users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_find_by_token_and_user()
            .times(1)
            .returning(move |_, _| Ok(Some(record.clone())));
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user_clone.clone())));
        sessions.expect_create().times(0);

        let err = service(users, sessions).refresh(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountUnavailable));
    }

    #[tokio::test]
    async fn test_refresh_rejects_tampered_token() {
        let users = MockTestUserRepository::new();
        let sessions = MockTestRefreshTokenRepository::new();

        let err = service(users, sessions)
            .refresh("not.a.token")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid or expired refresh token");
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        // An access token must not pass refresh verification even though
        // it carries the same payload shape.
        let user = active_user("Password123");
        let access = codec()
            .mint(
                &TokenPayload {
                    user_id: user.id.to_string(),
                    email: user.email.as_str().to_string(),
                    role: user.role.to_string(),
                },
                TokenKind::Access,
            )
            .unwrap();

        let users = MockTestUserRepository::new();
        let sessions = MockTestRefreshTokenRepository::new();

        let err = service(users, sessions).refresh(&access).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid or expired refresh token");
    }

    #[tokio::test]
    async fn test_logout_with_token_revokes_single_record() {
        let user = active_user("Password123");
        let record = live_record(&user, "some-refresh-token");
        let record_id = record.id;

        let users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_find_by_token()
            .with(eq("some-refresh-token"))
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));
        sessions
            .expect_revoke()
            .withf(move |id| *id == record_id)
            .times(1)
            .returning(|_| Ok(()));
        sessions.expect_revoke_all_for_user().times(0);

        let result = service(users, sessions)
            .logout(Some("some-refresh-token"), Some(user.id))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_logout_with_unknown_token_is_silent() {
        let users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(None));
        sessions.expect_revoke().times(0);

        let result = service(users, sessions)
            .logout(Some("unknown-token"), None)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_logout_without_token_revokes_all() {
        let user_id = UserId::new();

        let users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions
            .expect_revoke_all_for_user()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));
        sessions.expect_find_by_token().times(0);

        let result = service(users, sessions).logout(None, Some(user_id)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_logout_anonymous_is_a_no_op() {
        let users = MockTestUserRepository::new();
        let mut sessions = MockTestRefreshTokenRepository::new();
        sessions.expect_find_by_token().times(0);
        sessions.expect_revoke_all_for_user().times(0);

        let result = service(users, sessions).logout(None, None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_profile_success() {
        let user = active_user("Password123");
        let user_id = user.id;
        let user_clone = user.clone();

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(user_clone.clone())));

        let result = service(users, MockTestRefreshTokenRepository::new())
            .profile(&user_id)
            .await;
        assert_eq!(result.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_profile_missing_user() {
        let mut users = MockTestUserRepository::new();
        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = service(users, MockTestRefreshTokenRepository::new())
            .profile(&UserId::new())
            .await;
        assert!(matches!(result, Err(AuthError::AccountUnavailable)));
    }
}
