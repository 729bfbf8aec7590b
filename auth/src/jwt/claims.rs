use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

/// Intended use of a token.
///
/// Both kinds share the same claim shape and signing key; the kind is carried in the
/// `token_type` claim so a refresh token cannot be replayed where an access token is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => f.write_str("access"),
            TokenType::Refresh => f.write_str("refresh"),
        }
    }
}

/// Identity claims embedded in every token.
///
/// Generic over the role type so each service embeds its own closed role enum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims<R> {
    /// Subject email address
    pub email: String,

    /// Role of the subject at issuance time
    pub user_role: R,

    pub token_type: TokenType,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<R> Claims<R> {
    /// Create claims expiring `ttl_days` after `now`.
    ///
    /// # Arguments
    /// * `email` - Subject email address
    /// * `role` - Subject role
    /// * `token_type` - Intended use of the token
    /// * `ttl_days` - Days until the token expires (zero yields an already expired token)
    /// * `now` - Issuance instant in the deployment's configured timezone
    pub fn new(
        email: impl Into<String>,
        role: R,
        token_type: TokenType,
        ttl_days: i64,
        now: DateTime<FixedOffset>,
    ) -> Self {
        let expiration = now + Duration::days(ttl_days);

        Self {
            email: email.into(),
            user_role: role,
            token_type,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// A token is only valid while its expiry instant is strictly in the future.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
