use auth::JwtError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Failures of authentication and authorization.
///
/// Every variant except `Internal` is an expected, terminal outcome for the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No active user found with email {0}")]
    NoSuchActiveUser(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("You do not have permission to perform this action")]
    Forbidden,

    // Store, hashing and signing failures
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => AuthError::ExpiredToken,
            JwtError::Invalid(reason) => {
                tracing::debug!(reason = %reason, "Token rejected");
                AuthError::InvalidToken
            }
            JwtError::EncodingFailed(_) | JwtError::UnsupportedAlgorithm(_) => {
                AuthError::Internal(err.to_string())
            }
        }
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
