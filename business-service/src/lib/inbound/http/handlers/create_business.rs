use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::business::errors::BusinessNameError;
use crate::business::errors::LocationError;
use crate::domain::business::models::Business;
use crate::domain::business::models::BusinessDetails;
use crate::domain::business::models::BusinessName;
use crate::domain::business::models::Location;
use crate::domain::business::ports::BusinessServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AdminUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserIdError;

pub async fn create_business(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(body): Json<BusinessRequestBody>,
) -> Result<ApiSuccess<BusinessData>, ApiError> {
    state
        .business_service
        .create_business(&admin, body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref business| ApiSuccess::new(StatusCode::CREATED, business.into()))
}

/// HTTP request body shared by create and full update (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessRequestBody {
    name: String,
    location: LocationBody,
    #[serde(default)]
    members: Vec<String>,
    email: Option<String>,
    phone_number: Option<String>,
    display_picture: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationBody {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Error)]
pub enum ParseBusinessRequestError {
    #[error("Invalid business name: {0}")]
    Name(#[from] BusinessNameError),

    #[error("Invalid location: {0}")]
    Location(#[from] LocationError),

    #[error("Invalid member id: {0}")]
    Member(#[from] UserIdError),
}

impl BusinessRequestBody {
    pub fn try_into_details(self) -> Result<BusinessDetails, ParseBusinessRequestError> {
        let name = BusinessName::new(self.name)?;
        let location = Location::new(self.location.latitude, self.location.longitude)?;
        let members = self
            .members
            .iter()
            .map(|id| UserId::from_string(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BusinessDetails {
            name,
            location,
            members,
            email: self.email,
            phone_number: self.phone_number,
            display_picture: self.display_picture,
        })
    }
}

impl From<ParseBusinessRequestError> for ApiError {
    fn from(err: ParseBusinessRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessData {
    pub id: String,
    pub name: String,
    pub location: LocationBody,
    pub owner_id: Option<String>,
    pub members: Vec<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub display_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Business> for BusinessData {
    fn from(business: &Business) -> Self {
        Self {
            id: business.id.to_string(),
            name: business.name.to_string(),
            location: LocationBody {
                latitude: business.location.latitude(),
                longitude: business.location.longitude(),
            },
            owner_id: business.owner_id.map(|id| id.to_string()),
            members: business.members.iter().map(UserId::to_string).collect(),
            email: business.email.clone(),
            phone_number: business.phone_number.clone(),
            display_picture: business.display_picture.clone(),
            created_at: business.created_at,
            updated_at: business.updated_at,
        }
    }
}
