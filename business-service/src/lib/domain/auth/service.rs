use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenType;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthClaims;
use crate::domain::auth::models::LoginTokens;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserRole;
use crate::user::ports::UserRepository;

/// Authenticator and access guard over a credential store.
///
/// Stateless: every call reads the store, nothing is cached between requests.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: Arc<PasswordHasher>,
    token_issuer: Arc<TokenIssuer>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `password_hasher` - Hasher built once from configuration
    /// * `token_issuer` - Issuer holding the signing secret and token lifetimes
    pub fn new(
        repository: Arc<UR>,
        password_hasher: Arc<PasswordHasher>,
        token_issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_issuer,
        }
    }

    async fn verify_password(&self, raw: &str, hash: &str) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.password_hasher);
        let raw = raw.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&raw, &hash))
            .await
            .map_err(|e| {
                AuthError::Internal(format!("Password verification task failed: {}", e))
            })?
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .repository
            .find_active_by_email(email)
            .await?
            .ok_or_else(|| AuthError::NoSuchActiveUser(email.to_string()))?;

        if !self.verify_password(password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginTokens, AuthError> {
        let user = self.authenticate(email, password).await?;

        let tokens = self
            .token_issuer
            .issue_pair(user.email.as_str(), &user.role)?;

        tracing::info!(email = %user.email, "User signed in successfully");
        Ok(tokens.into())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let claims: AuthClaims = self
            .token_issuer
            .validate(refresh_token, TokenType::Refresh)?;

        // Any stored user may refresh; the access guard rejects deactivated ones
        let user = self
            .repository
            .find_by_email(&claims.email)
            .await?
            .ok_or_else(|| AuthError::NoSuchActiveUser(claims.email.clone()))?;

        Ok(self
            .token_issuer
            .issue_access(user.email.as_str(), &user.role)?)
    }

    async fn current_identity(&self, token: &str) -> Result<User, AuthError> {
        let claims: AuthClaims = self.token_issuer.validate(token, TokenType::Access)?;

        self.repository
            .find_active_by_email(&claims.email)
            .await?
            .ok_or_else(|| AuthError::NoSuchActiveUser(claims.email.clone()))
    }
}

/// Pass the user through iff they hold exactly `role`.
///
/// # Errors
/// * `Forbidden` - The user has any other role
pub fn require_role(user: User, role: UserRole) -> Result<User, AuthError> {
    if user.role == role {
        Ok(user)
    } else {
        tracing::warn!(
            user_id = %user.id,
            role = %user.role,
            required = %role,
            "Role check failed"
        );
        Err(AuthError::Forbidden)
    }
}

/// Admin-only gate for privileged operations.
pub fn require_admin(user: User) -> Result<User, AuthError> {
    require_role(user, UserRole::Admin)
}
