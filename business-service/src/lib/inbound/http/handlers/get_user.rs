use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::get_profile::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AdminUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

pub async fn get_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;

    state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
