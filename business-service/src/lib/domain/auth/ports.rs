use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginTokens;
use crate::domain::user::models::User;

/// Port for authentication and per-request identity resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify raw credentials against the credential store.
    ///
    /// # Arguments
    /// * `email` - Email exactly as stored
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// The verified, active user
    ///
    /// # Errors
    /// * `NoSuchActiveUser` - No active user has this email
    /// * `InvalidCredentials` - Password does not match
    /// * `Internal` - Store or hashing failure
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Authenticate and mint an access/refresh token pair.
    ///
    /// # Errors
    /// Same as `authenticate`, plus `Internal` when signing fails
    async fn login(&self, email: &str, password: &str) -> Result<LoginTokens, AuthError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// * `ExpiredToken` - Refresh token is past its expiry
    /// * `InvalidToken` - Malformed, badly signed, or not a refresh token
    /// * `NoSuchActiveUser` - Subject no longer exists
    /// * `Internal` - Store or signing failure
    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError>;

    /// Resolve the user behind a bearer access token.
    ///
    /// Always consults the credential store, so deactivation takes effect immediately.
    ///
    /// # Errors
    /// * `ExpiredToken` - Token is past its expiry
    /// * `InvalidToken` - Malformed, badly signed, or not an access token
    /// * `NoSuchActiveUser` - Subject is missing or deactivated
    /// * `Internal` - Store failure
    async fn current_identity(&self, token: &str) -> Result<User, AuthError>;
}
