use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::models::User;
use crate::domain::auth::models::Username;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Returns
    /// Created user identity (never includes the plaintext password)
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `Persistence` - Credential store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue one access and one refresh token.
    ///
    /// The refresh token is registered as live before the pair is returned.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    ///   (indistinguishable by design)
    /// * `Persistence` - Credential store or registry operation failed
    async fn login(&self, username: &Username, password: &str) -> Result<TokenPair, AuthError>;

    /// Mint a new access token from a live refresh token.
    ///
    /// The refresh token itself is never rotated or returned.
    ///
    /// # Errors
    /// * `TokenMissing` - No token supplied
    /// * `TokenInvalid` - Signature mismatch or malformed token
    /// * `TokenNotLive` - Token verifies but is absent from the registry
    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError>;

    /// Invalidate a refresh token.
    ///
    /// Idempotent: succeeds whether or not the token was ever live.
    ///
    /// # Errors
    /// * `Persistence` - Registry operation failed
    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError>;
}

/// Persistence operations for the user identity aggregate.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Persist a new user identity.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `Persistence` - Store operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve a user by username.
    ///
    /// # Returns
    /// Optional user identity (None if not found)
    ///
    /// # Errors
    /// * `Persistence` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;
}

/// Authoritative liveness set for refresh tokens.
///
/// A refresh token is only honored while it is a member here; removal is how
/// logout revokes it. Implementations must make add/contains/remove
/// linearizable with respect to each other.
#[async_trait]
pub trait RefreshTokenRegistry: Send + Sync + 'static {
    /// Mark a token as live.
    async fn add(&self, token: &str) -> Result<(), AuthError>;

    /// Check whether a token is currently live.
    async fn contains(&self, token: &str) -> Result<bool, AuthError>;

    /// Remove a token; removing an absent token is a no-op.
    async fn remove(&self, token: &str) -> Result<(), AuthError>;
}
