//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id, tunable cost)
//! - JWT issuance and validation, keyed per token class (access vs refresh)
//!
//! Each service defines its own authentication traits and adapts these
//! implementations. This avoids coupling services through shared domain logic
//! while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Token Issuance
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(
//!     b"access_secret_at_least_32_bytes_long!",
//!     b"refresh_secret_at_least_32_bytes_long",
//!     15,
//! );
//!
//! // Login: issue one token of each class
//! let access = tokens.issue_access_token("user123", "alice").unwrap();
//! let refresh = tokens.issue_refresh_token("user123", "alice").unwrap();
//!
//! // Validate against the matching class key
//! let claims = tokens.verify_access_token(&access).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert!(tokens.verify_access_token(&refresh).is_err());
//! ```

pub mod jwt;
pub mod password;
pub mod tokens;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use tokens::TokenService;
