use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claim set bound into every issued token.
///
/// Identity claims (`sub`, `username`) plus `iat` are present in both token
/// classes; `exp` is only embedded in access tokens. Refresh tokens carry no
/// expiry of their own - their liveness is decided elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username bound to the subject
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Unique token identifier; keeps tokens minted within the same second
    /// distinct
    pub jti: String,

    /// Expiration time (Unix timestamp), absent for refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Build the claim set for an access token.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username bound to the token
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    /// Claims with sub, username, iat, and exp set
    pub fn access(user_id: impl ToString, username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            exp: Some((now + ttl).timestamp()),
        }
    }

    /// Build the claim set for a refresh token (no expiry).
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username bound to the token
    pub fn refresh(user_id: impl ToString, username: impl Into<String>) -> Self {
        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: Utc::now().timestamp(),
            jti: Uuid::new_v4().to_string(),
            exp: None,
        }
    }

    /// Check if the claim set is expired at the given timestamp.
    ///
    /// Claims without an `exp` never expire.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}
