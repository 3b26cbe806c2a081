use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::ports::RefreshTokenRegistry;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection:
/// credential persistence and the refresh-token liveness set are ports, so
/// backends swap without touching the flows here.
pub struct AuthService<CS, RG>
where
    CS: CredentialStore,
    RG: RefreshTokenRegistry,
{
    credentials: Arc<CS>,
    registry: Arc<RG>,
    tokens: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<CS, RG> AuthService<CS, RG>
where
    CS: CredentialStore,
    RG: RefreshTokenRegistry,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `credentials` - Credential store implementation
    /// * `registry` - Refresh token registry implementation
    /// * `tokens` - Token issuer/verifier
    pub fn new(credentials: Arc<CS>, registry: Arc<RG>, tokens: Arc<TokenService>) -> Self {
        Self {
            credentials,
            registry,
            tokens,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Argon2 is CPU-bound; keep it off the async workers.
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))?
            .map_err(|e| AuthError::Internal(format!("Password verification failed: {}", e)))
    }
}

#[async_trait]
impl<CS, RG> AuthServicePort for AuthService<CS, RG>
where
    CS: CredentialStore,
    RG: RefreshTokenRegistry,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        let password_hash = self.hash_password(command.password.into_inner()).await?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.credentials.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, username: &Username, password: &str) -> Result<TokenPair, AuthError> {
        // Unknown username and wrong password must answer identically
        let user = self
            .credentials
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?;

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let user_id = user.id.to_string();
        let access_token = self
            .tokens
            .issue_access_token(&user_id, user.username.as_str())
            .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))?;
        let refresh_token = self
            .tokens
            .issue_refresh_token(&user_id, user.username.as_str())
            .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))?;

        self.registry.add(&refresh_token).await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        if refresh_token.is_empty() {
            return Err(AuthError::TokenMissing);
        }

        // Signature proves authenticity only; the registry decides liveness
        let claims = self
            .tokens
            .verify_refresh_token(refresh_token)
            .map_err(|_| AuthError::TokenInvalid)?;

        if !self.registry.contains(refresh_token).await? {
            tracing::warn!(user_id = %claims.sub, "Refresh attempt with revoked token");
            return Err(AuthError::TokenNotLive);
        }

        self.tokens
            .issue_access_token(&claims.sub, &claims.username)
            .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        // Idempotent: removing an absent token is a no-op
        self.registry.remove(refresh_token).await
    }
}
