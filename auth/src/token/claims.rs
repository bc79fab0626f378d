use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Issuer claim embedded in every minted token.
pub const ISSUER: &str = "library-api";

/// Audience claim embedded in every minted token.
pub const AUDIENCE: &str = "library-api-users";

/// Identity carried inside both access and refresh tokens.
///
/// This is the caller-facing projection; registered claims (exp, iat,
/// iss, aud) are added at mint time and stripped again on verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub user_id: String,
    pub email: String,
    pub role: String,
}

/// Full JWT claim set as signed onto the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// User email
    pub email: String,

    /// User role
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID. Unique per minted token, so two tokens for the same
    /// identity in the same second still differ on the wire.
    pub jti: String,
}

impl Claims {
    /// Build a claim set for the payload, expiring `ttl` from now.
    pub fn new(payload: &TokenPayload, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: payload.user_id.clone(),
            email: payload.email.clone(),
            role: payload.role.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Strip registered claims, returning the identity payload.
    pub fn into_payload(self) -> TokenPayload {
        TokenPayload {
            user_id: self.sub,
            email: self.email,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TokenPayload {
        TokenPayload {
            user_id: "user123".to_string(),
            email: "alice@example.com".to_string(),
            role: "USER".to_string(),
        }
    }

    #[test]
    fn test_new_sets_expiry_window() {
        let claims = Claims::new(&payload(), Duration::minutes(15));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.aud, AUDIENCE);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_into_payload_round_trip() {
        let claims = Claims::new(&payload(), Duration::days(7));
        assert_eq!(claims.into_payload(), payload());
    }

    #[test]
    fn test_jti_is_unique_per_claim_set() {
        let first = Claims::new(&payload(), Duration::minutes(15));
        let second = Claims::new(&payload(), Duration::minutes(15));
        assert_ne!(first.jti, second.jti);
    }
}
