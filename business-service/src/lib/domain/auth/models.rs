use auth::Claims;

use crate::domain::user::models::UserRole;

/// Claims carried by tokens issued by this service.
pub type AuthClaims = Claims<UserRole>;

/// Tokens returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<auth::TokenPair> for LoginTokens {
    fn from(pair: auth::TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
