use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::user::models::BootstrapAdminCommand;
use crate::domain::user::models::InviteUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRole;
use crate::user::errors::UserError;
use crate::user::ports::InvitationNotifier;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR, IN>
where
    UR: UserRepository,
    IN: InvitationNotifier,
{
    repository: Arc<UR>,
    notifier: Arc<IN>,
    password_hasher: Arc<PasswordHasher>,
    default_password: String,
}

impl<UR, IN> UserService<UR, IN>
where
    UR: UserRepository,
    IN: InvitationNotifier,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `notifier` - Invitation delivery implementation
    /// * `password_hasher` - Hasher built once from configuration
    /// * `default_password` - Initial password assigned to invited users
    pub fn new(
        repository: Arc<UR>,
        notifier: Arc<IN>,
        password_hasher: Arc<PasswordHasher>,
        default_password: String,
    ) -> Self {
        Self {
            repository,
            notifier,
            password_hasher,
            default_password,
        }
    }

    async fn hash_password(&self, raw: String) -> Result<String, UserError> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&raw))
            .await
            .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(UserError::from)
    }
}

#[async_trait]
impl<UR, IN> UserServicePort for UserService<UR, IN>
where
    UR: UserRepository,
    IN: InvitationNotifier,
{
    async fn invite_user(&self, command: InviteUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            tracing::warn!(email = %command.email, "User already registered");
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(self.default_password.clone()).await?;
        let now = Utc::now();

        let user = User {
            id: UserId::new(),
            full_name: command.full_name,
            email: command.email,
            role: command.role,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "User invited"
        );

        if let Err(e) = self.notifier.notify_invited(&created_user).await {
            tracing::error!(
                "Failed to send invitation to user {}: {}",
                created_user.id,
                e
            );
        }

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn set_user_active(&self, id: &UserId, active: bool) -> Result<User, UserError> {
        let user = self.repository.set_active(id, active).await?;
        tracing::info!(user_id = %user.id, active, "User active flag changed");
        Ok(user)
    }

    async fn bootstrap_admin(&self, command: BootstrapAdminCommand) -> Result<User, UserError> {
        if let Some(existing) = self
            .repository
            .find_by_email(command.email.as_str())
            .await?
        {
            tracing::info!(email = %existing.email, "Admin user already exists");
            return Ok(existing);
        }

        let password_hash = self.hash_password(command.password).await?;
        let now = Utc::now();

        let admin = self
            .repository
            .create(User {
                id: UserId::new(),
                full_name: command.full_name,
                email: command.email,
                role: UserRole::Admin,
                password_hash,
                is_active: true,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(user_id = %admin.id, email = %admin.email, "Admin user created");
        Ok(admin)
    }
}
