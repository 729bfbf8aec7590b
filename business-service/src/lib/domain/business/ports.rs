use async_trait::async_trait;

use crate::business::errors::BusinessError;
use crate::domain::business::models::Business;
use crate::domain::business::models::BusinessDetails;
use crate::domain::business::models::BusinessId;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for business domain service operations.
///
/// Callers are expected to have passed the admin gate for every operation except
/// `get_business`; ownership is checked here.
#[async_trait]
pub trait BusinessServicePort: Send + Sync + 'static {
    /// Create a business owned by `owner`.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Another business has this name
    /// * `UnknownMember` - A member id does not reference a user
    /// * `DatabaseError` - Database operation failed
    async fn create_business(
        &self,
        owner: &User,
        details: BusinessDetails,
    ) -> Result<Business, BusinessError>;

    /// Retrieve a business by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Business does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_business(&self, id: &BusinessId) -> Result<Business, BusinessError>;

    /// List the businesses owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_owned_businesses(&self, owner: &User) -> Result<Vec<Business>, BusinessError>;

    /// Replace the editable fields of a business owned by `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Business does not exist
    /// * `NotOwner` - `actor` does not own the business
    /// * `NameAlreadyExists` - Another business has the new name
    /// * `UnknownMember` - A member id does not reference a user
    /// * `DatabaseError` - Database operation failed
    async fn update_business(
        &self,
        actor: &User,
        id: &BusinessId,
        details: BusinessDetails,
    ) -> Result<Business, BusinessError>;

    /// Delete a business owned by `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Business does not exist
    /// * `NotOwner` - `actor` does not own the business
    /// * `DatabaseError` - Database operation failed
    async fn delete_business(&self, actor: &User, id: &BusinessId) -> Result<(), BusinessError>;
}

/// Persistence operations for the business aggregate, roster included.
#[async_trait]
pub trait BusinessRepository: Send + Sync + 'static {
    /// Persist a new business and its roster.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Unique name constraint violated
    /// * `UnknownMember` - Roster references a missing user
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, business: Business) -> Result<Business, BusinessError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, BusinessError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_name(&self, name: &str) -> Result<Option<Business>, BusinessError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Business>, BusinessError>;

    /// Overwrite a business and replace its roster.
    ///
    /// # Errors
    /// * `NotFound` - Business does not exist
    /// * `NameAlreadyExists` - Unique name constraint violated
    /// * `UnknownMember` - Roster references a missing user
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, business: Business) -> Result<Business, BusinessError>;

    /// # Errors
    /// * `NotFound` - Business does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &BusinessId) -> Result<(), BusinessError>;
}
