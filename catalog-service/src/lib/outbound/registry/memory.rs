use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::RefreshTokenRegistry;

/// In-memory refresh-token liveness set.
///
/// Tracks when each token was registered so stale entries can be purged; the
/// set itself grows without bound unless `purge_older_than` runs (logins keep
/// adding, only logout removes).
pub struct InMemoryRefreshTokenRegistry {
    tokens: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryRefreshTokenRegistry {
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Drop every token registered before the cutoff.
    ///
    /// # Returns
    /// Number of tokens removed
    pub async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> usize {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, registered_at| *registered_at >= cutoff);
        let removed = before - tokens.len();

        if removed > 0 {
            tracing::info!(removed, remaining = tokens.len(), "Purged stale refresh tokens");
        }

        removed
    }

    /// Get the number of currently live tokens.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for InMemoryRefreshTokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRegistry for InMemoryRefreshTokenRegistry {
    async fn add(&self, token: &str) -> Result<(), AuthError> {
        self.tokens
            .write()
            .await
            .insert(token.to_string(), Utc::now());
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, AuthError> {
        Ok(self.tokens.read().await.contains_key(token))
    }

    async fn remove(&self, token: &str) -> Result<(), AuthError> {
        self.tokens.write().await.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[tokio::test]
    async fn test_add_contains_remove() {
        let registry = InMemoryRefreshTokenRegistry::new();

        assert!(!registry.contains("token-a").await.unwrap());

        registry.add("token-a").await.unwrap();
        assert!(registry.contains("token-a").await.unwrap());

        registry.remove("token-a").await.unwrap();
        assert!(!registry.contains("token-a").await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let registry = InMemoryRefreshTokenRegistry::new();

        registry.add("token-a").await.unwrap();
        registry.remove("token-a").await.unwrap();
        registry.remove("token-a").await.unwrap();
        registry.remove("never-added").await.unwrap();

        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_purge_older_than() {
        let registry = InMemoryRefreshTokenRegistry::new();

        registry.add("token-a").await.unwrap();
        registry.add("token-b").await.unwrap();
        assert_eq!(registry.len().await, 2);

        // Nothing is old enough yet
        let removed = registry
            .purge_older_than(Utc::now() - Duration::hours(1))
            .await;
        assert_eq!(removed, 0);
        assert_eq!(registry.len().await, 2);

        // Everything is older than a future cutoff
        let removed = registry
            .purge_older_than(Utc::now() + Duration::hours(1))
            .await;
        assert_eq!(removed, 2);
        assert!(registry.is_empty().await);
    }
}
