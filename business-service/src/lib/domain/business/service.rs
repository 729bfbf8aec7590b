use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::business::errors::BusinessError;
use crate::business::ports::BusinessRepository;
use crate::business::ports::BusinessServicePort;
use crate::domain::business::models::Business;
use crate::domain::business::models::BusinessDetails;
use crate::domain::business::models::BusinessId;
use crate::domain::business::models::distinct_members;
use crate::domain::user::models::User;

/// Domain service implementation for business operations.
pub struct BusinessService<BR>
where
    BR: BusinessRepository,
{
    repository: Arc<BR>,
}

impl<BR> BusinessService<BR>
where
    BR: BusinessRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }

    async fn find_owned(&self, actor: &User, id: &BusinessId) -> Result<Business, BusinessError> {
        let business = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::error!(business_id = %id, "Business not found");
                BusinessError::NotFound(id.to_string())
            })?;

        if !business.is_owned_by(actor) {
            tracing::error!(
                business_id = %id,
                user_id = %actor.id,
                "Unauthorized attempt to modify business"
            );
            return Err(BusinessError::NotOwner);
        }

        Ok(business)
    }
}

#[async_trait]
impl<BR> BusinessServicePort for BusinessService<BR>
where
    BR: BusinessRepository,
{
    async fn create_business(
        &self,
        owner: &User,
        details: BusinessDetails,
    ) -> Result<Business, BusinessError> {
        if self
            .repository
            .find_by_name(details.name.as_str())
            .await?
            .is_some()
        {
            tracing::warn!(name = %details.name, "Business already exists");
            return Err(BusinessError::NameAlreadyExists(details.name.to_string()));
        }

        let now = Utc::now();
        let business = Business {
            id: BusinessId::new(),
            name: details.name,
            location: details.location,
            owner_id: Some(owner.id),
            members: distinct_members(details.members),
            email: details.email,
            phone_number: details.phone_number,
            display_picture: details.display_picture,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(business).await?;
        tracing::info!(business_id = %created.id, name = %created.name, "Business created");
        Ok(created)
    }

    async fn get_business(&self, id: &BusinessId) -> Result<Business, BusinessError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BusinessError::NotFound(id.to_string()))
    }

    async fn list_owned_businesses(&self, owner: &User) -> Result<Vec<Business>, BusinessError> {
        let businesses = self.repository.list_by_owner(&owner.id).await?;
        tracing::debug!(owner_id = %owner.id, count = businesses.len(), "Listed businesses");
        Ok(businesses)
    }

    async fn update_business(
        &self,
        actor: &User,
        id: &BusinessId,
        details: BusinessDetails,
    ) -> Result<Business, BusinessError> {
        let mut business = self.find_owned(actor, id).await?;

        if details.name != business.name {
            if let Some(other) = self.repository.find_by_name(details.name.as_str()).await? {
                if other.id != business.id {
                    return Err(BusinessError::NameAlreadyExists(details.name.to_string()));
                }
            }
        }

        business.name = details.name;
        business.location = details.location;
        business.members = distinct_members(details.members);
        business.email = details.email;
        business.phone_number = details.phone_number;
        business.display_picture = details.display_picture;
        business.updated_at = Utc::now();

        let updated = self.repository.update(business).await?;
        tracing::info!(business_id = %updated.id, "Business updated");
        Ok(updated)
    }

    async fn delete_business(&self, actor: &User, id: &BusinessId) -> Result<(), BusinessError> {
        let business = self.find_owned(actor, id).await?;

        self.repository.delete(&business.id).await?;
        tracing::info!(business_id = %business.id, name = %business.name, "Business deleted");
        Ok(())
    }
}
