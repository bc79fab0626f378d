//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (bcrypt) and password-strength policy
//! - Signed access/refresh token generation and validation
//!
//! Each service defines its own authentication flows and adapts these
//! implementations. This avoids coupling services through shared domain
//! logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(4);
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Token Pairs
//! ```
//! use chrono::Duration;
//! use auth::{TokenCodec, TokenKind, TokenPayload};
//!
//! let codec = TokenCodec::new(
//!     b"access_secret_at_least_32_bytes_long!",
//!     b"refresh_secret_at_least_32_bytes_lng!",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! );
//!
//! let payload = TokenPayload {
//!     user_id: "user123".to_string(),
//!     email: "alice@example.com".to_string(),
//!     role: "USER".to_string(),
//! };
//!
//! let pair = codec.mint_pair(&payload).unwrap();
//! let decoded = codec.verify(&pair.access_token, TokenKind::Access).unwrap();
//! assert_eq!(decoded.user_id, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenKind;
pub use token::TokenPair;
pub use token::TokenPayload;
