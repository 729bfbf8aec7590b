use async_trait::async_trait;

use crate::domain::user::models::BootstrapAdminCommand;
use crate::domain::user::models::InviteUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::NotificationError;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Invite a new user with the configured default password.
    ///
    /// # Arguments
    /// * `command` - Validated name, email and role
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing the default password failed
    /// * `DatabaseError` - Database operation failed
    async fn invite_user(&self, command: InviteUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Activate or deactivate a user account.
    ///
    /// A deactivated user keeps their tokens, but the access guard stops resolving them.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_user_active(&self, id: &UserId, active: bool) -> Result<User, UserError>;

    /// Create the administrator account unless a user with that email exists.
    ///
    /// # Returns
    /// The existing or newly created user
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn bootstrap_admin(&self, command: BootstrapAdminCommand) -> Result<User, UserError>;
}

/// Credential store: persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (unique constraint)
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by exact email address, regardless of the active flag.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve an active user by exact email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Set the active flag and return the updated user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_active(&self, id: &UserId, active: bool) -> Result<User, UserError>;
}

/// Delivery of invitations to newly invited users.
#[async_trait]
pub trait InvitationNotifier: Send + Sync + 'static {
    /// Tell the invited user their account exists.
    ///
    /// # Errors
    /// * `DeliveryFailed` - The invitation could not be sent
    async fn notify_invited(&self, user: &User) -> Result<(), NotificationError>;
}
