use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::get_profile::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::InviteUserCommand;
use crate::domain::user::models::UserRole;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AdminUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::FullNameError;
use crate::user::errors::RoleError;

pub async fn invite_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(body): Json<InviteUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = body.try_into_command()?;
    tracing::debug!(admin_id = %admin.id, email = %command.email, "Inviting user");

    state
        .user_service
        .invite_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for inviting a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InviteUserRequest {
    full_name: String,
    email: String,
    role: String,
}

#[derive(Debug, Clone, Error)]
enum ParseInviteUserRequestError {
    #[error("Invalid full name: {0}")]
    FullName(#[from] FullNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),
}

impl InviteUserRequest {
    fn try_into_command(self) -> Result<InviteUserCommand, ParseInviteUserRequestError> {
        let full_name = FullName::new(self.full_name)?;
        let email = EmailAddress::new(self.email)?;
        let role = self.role.parse::<UserRole>()?;
        Ok(InviteUserCommand::new(full_name, email, role))
    }
}

impl From<ParseInviteUserRequestError> for ApiError {
    fn from(err: ParseInviteUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
