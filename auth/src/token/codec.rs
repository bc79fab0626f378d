use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenPayload;
use super::claims::AUDIENCE;
use super::claims::ISSUER;
use super::errors::TokenError;

/// Token flavor, selecting the signing secret and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived credential presented on every request.
    Access,
    /// Long-lived credential used solely to mint a new pair.
    Refresh,
}

/// An access/refresh token pair minted for one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

struct KindKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

/// Token codec for minting and verifying access and refresh tokens.
///
/// Each kind signs with its own secret, so compromise of one secret does
/// not allow forging tokens of the other kind. Uses HS256.
pub struct TokenCodec {
    access: KindKeys,
    refresh: KindKeys,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec with independent secrets and lifetimes per kind.
    ///
    /// # Arguments
    /// * `access_secret` - Secret for signing access tokens
    /// * `refresh_secret` - Secret for signing refresh tokens
    /// * `access_ttl` - Access token lifetime
    /// * `refresh_ttl` - Refresh token lifetime
    ///
    /// # Security Notes
    /// - Secrets should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access: KindKeys {
                encoding_key: EncodingKey::from_secret(access_secret),
                decoding_key: DecodingKey::from_secret(access_secret),
                ttl: access_ttl,
            },
            refresh: KindKeys {
                encoding_key: EncodingKey::from_secret(refresh_secret),
                decoding_key: DecodingKey::from_secret(refresh_secret),
                ttl: refresh_ttl,
            },
            algorithm: Algorithm::HS256,
        }
    }

    /// Mint a signed token of the given kind.
    ///
    /// Fills issued-at, expiry, issuer, and audience claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn mint(&self, payload: &TokenPayload, kind: TokenKind) -> Result<String, TokenError> {
        let keys = self.keys(kind);
        let claims = Claims::new(payload, keys.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &keys.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token as the given kind and return its identity payload.
    ///
    /// Checks signature, issuer, audience, and expiry.
    ///
    /// # Errors
    /// * `Expired` - Token is past its expiry
    /// * `Invalid` - Signature or claims do not match
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<TokenPayload, TokenError> {
        let keys = self.keys(kind);

        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);

        let token_data =
            decode::<Claims>(token, &keys.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims.into_payload())
    }

    /// Mint an access/refresh pair for the same identity.
    ///
    /// # Errors
    /// * `EncodingFailed` - Either token failed to encode
    pub fn mint_pair(&self, payload: &TokenPayload) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.mint(payload, TokenKind::Access)?,
            refresh_token: self.mint(payload, TokenKind::Refresh)?,
        })
    }

    fn keys(&self, kind: TokenKind) -> &KindKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_SECRET: &[u8] = b"access_secret_at_least_32_bytes_long!";
    const REFRESH_SECRET: &[u8] = b"refresh_secret_at_least_32_bytes_lng!";

    fn codec() -> TokenCodec {
        TokenCodec::new(
            ACCESS_SECRET,
            REFRESH_SECRET,
            Duration::minutes(15),
            Duration::days(7),
        )
    }

    fn payload() -> TokenPayload {
        TokenPayload {
            user_id: "user123".to_string(),
            email: "alice@example.com".to_string(),
            role: "ADMIN".to_string(),
        }
    }

    #[test]
    fn test_mint_and_verify_access() {
        let codec = codec();

        let token = codec
            .mint(&payload(), TokenKind::Access)
            .expect("Failed to mint token");
        let decoded = codec
            .verify(&token, TokenKind::Access)
            .expect("Failed to verify token");

        assert_eq!(decoded, payload());
    }

    #[test]
    fn test_mint_and_verify_refresh() {
        let codec = codec();

        let token = codec
            .mint(&payload(), TokenKind::Refresh)
            .expect("Failed to mint token");
        let decoded = codec
            .verify(&token, TokenKind::Refresh)
            .expect("Failed to verify token");

        assert_eq!(decoded, payload());
    }

    #[test]
    fn test_kinds_use_independent_secrets() {
        let codec = codec();

        let access = codec.mint(&payload(), TokenKind::Access).unwrap();
        let refresh = codec.mint(&payload(), TokenKind::Refresh).unwrap();

        assert!(matches!(
            codec.verify(&access, TokenKind::Refresh),
            Err(TokenError::Invalid(_))
        ));
        assert!(matches!(
            codec.verify(&refresh, TokenKind::Access),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let codec = codec();
        let other = TokenCodec::new(
            b"other_access_secret_32_bytes_long!!!!",
            b"other_refresh_secret_32_bytes_long!!!",
            Duration::minutes(15),
            Duration::days(7),
        );

        let token = codec.mint(&payload(), TokenKind::Access).unwrap();

        assert!(matches!(
            other.verify(&token, TokenKind::Access),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_verify_expired_token() {
        // Negative lifetime puts exp beyond the default validation leeway.
        let expired = TokenCodec::new(
            ACCESS_SECRET,
            REFRESH_SECRET,
            Duration::minutes(-5),
            Duration::minutes(-5),
        );

        let token = expired.mint(&payload(), TokenKind::Access).unwrap();

        assert!(matches!(
            expired.verify(&token, TokenKind::Access),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_verify_garbage_token() {
        let codec = codec();

        assert!(matches!(
            codec.verify("invalid.token.here", TokenKind::Access),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_same_payload_mints_distinct_tokens() {
        // Rotation must never reissue a byte-identical refresh token,
        // even when both mints land in the same second.
        let codec = codec();

        let first = codec.mint(&payload(), TokenKind::Refresh).unwrap();
        let second = codec.mint(&payload(), TokenKind::Refresh).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_mint_pair() {
        let codec = codec();

        let pair = codec.mint_pair(&payload()).expect("Failed to mint pair");

        assert_ne!(pair.access_token, pair.refresh_token);
        assert_eq!(
            codec
                .verify(&pair.access_token, TokenKind::Access)
                .unwrap(),
            payload()
        );
        assert_eq!(
            codec
                .verify(&pair.refresh_token, TokenKind::Refresh)
                .unwrap(),
            payload()
        );
    }
}
