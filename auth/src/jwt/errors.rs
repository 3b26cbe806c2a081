use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures are deliberately a single kind: a malformed,
/// expired, or forged token all surface as `Invalid` so callers cannot be
/// used as a validation oracle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    Invalid,
}
