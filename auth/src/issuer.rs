use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::jwt::TokenType;

/// Issues and validates the access/refresh token pair.
///
/// Both kinds go through the same codec; they differ in lifetime and in the
/// `token_type` claim, which `validate` enforces.
pub struct TokenIssuer {
    codec: TokenCodec,
    access_ttl_days: i64,
    refresh_ttl_days: i64,
}

/// Tokens minted at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `codec` - Configured token codec
    /// * `access_ttl_days` - Lifetime of access tokens
    /// * `refresh_ttl_days` - Lifetime of refresh tokens
    pub fn new(codec: TokenCodec, access_ttl_days: i64, refresh_ttl_days: i64) -> Self {
        Self {
            codec,
            access_ttl_days,
            refresh_ttl_days,
        }
    }

    /// Mint an access token and a refresh token for the same subject.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_pair<R: Serialize + Clone>(
        &self,
        email: &str,
        role: &R,
    ) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.issue(email, role, TokenType::Access)?,
            refresh_token: self.issue(email, role, TokenType::Refresh)?,
        })
    }

    /// Mint an access token only, as done when refreshing.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_access<R: Serialize + Clone>(
        &self,
        email: &str,
        role: &R,
    ) -> Result<String, JwtError> {
        self.issue(email, role, TokenType::Access)
    }

    /// Decode a token and check it was issued for the expected use.
    ///
    /// # Errors
    /// * `Expired` - Token is past its expiry
    /// * `Invalid` - Token is malformed, badly signed, or of the other kind
    pub fn validate<R: DeserializeOwned>(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Result<Claims<R>, JwtError> {
        let claims: Claims<R> = self.codec.decode(token)?;

        if claims.token_type != expected {
            return Err(JwtError::Invalid(format!(
                "expected {} token, got {} token",
                expected, claims.token_type
            )));
        }

        Ok(claims)
    }

    fn issue<R: Serialize + Clone>(
        &self,
        email: &str,
        role: &R,
        token_type: TokenType,
    ) -> Result<String, JwtError> {
        let ttl_days = match token_type {
            TokenType::Access => self.access_ttl_days,
            TokenType::Refresh => self.refresh_ttl_days,
        };

        let claims = Claims::new(email, role.clone(), token_type, ttl_days, self.codec.now());
        self.codec.encode(&claims)
    }
}
