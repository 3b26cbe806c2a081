use chrono::Duration;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenClaims;

/// Token issuer and verifier, keyed per token class.
///
/// Access and refresh tokens are signed with independent secrets: a leaked
/// refresh-signing key cannot forge access tokens and vice versa. Access
/// tokens are time-bounded; refresh tokens carry no expiry of their own.
pub struct TokenService {
    access: JwtHandler,
    refresh: JwtHandler,
    access_ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `access_secret` - Signing key for the access token class
    /// * `refresh_secret` - Signing key for the refresh token class
    /// * `access_ttl_minutes` - Access token lifetime
    pub fn new(access_secret: &[u8], refresh_secret: &[u8], access_ttl_minutes: i64) -> Self {
        Self {
            access: JwtHandler::new(access_secret),
            refresh: JwtHandler::new(refresh_secret),
            access_ttl: Duration::minutes(access_ttl_minutes),
        }
    }

    /// Issue a signed, time-bounded access token for a user.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_access_token(&self, user_id: &str, username: &str) -> Result<String, JwtError> {
        let claims = TokenClaims::access(user_id, username, self.access_ttl);
        self.access.encode(&claims)
    }

    /// Issue a signed refresh token for a user (no built-in expiry).
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_refresh_token(&self, user_id: &str, username: &str) -> Result<String, JwtError> {
        let claims = TokenClaims::refresh(user_id, username);
        self.refresh.encode(&claims)
    }

    /// Validate an access token and extract its claims.
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch, malformed input, or expired token
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.access.decode(token)
    }

    /// Validate a refresh token signature and extract its claims.
    ///
    /// Only proves authenticity; current liveness is decided by the caller's
    /// registry.
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch or malformed input
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.refresh.decode(token)
    }
}
