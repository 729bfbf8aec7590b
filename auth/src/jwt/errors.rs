use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding only ever yields `Expired` or `Invalid`; the other variants come from
/// construction and encoding and indicate a misconfiguration or a signing library failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
