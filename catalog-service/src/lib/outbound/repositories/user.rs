use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::CredentialStore;

/// Postgres-backed credential store.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: PgRow) -> Result<User, AuthError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| AuthError::Persistence(e.to_string()))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| AuthError::Persistence(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| AuthError::Persistence(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| AuthError::Persistence(e.to_string()))?;

    Ok(User {
        id: UserId(id),
        username: Username::new(username)?,
        password_hash,
        created_at,
    })
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::UsernameTaken(user.username.as_str().to_string());
                }
            }
            AuthError::Persistence(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Persistence(e.to_string()))?;

        row.map(row_to_user).transpose()
    }
}
