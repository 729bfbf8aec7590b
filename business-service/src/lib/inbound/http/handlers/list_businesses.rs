use axum::extract::State;
use axum::http::StatusCode;

use super::create_business::BusinessData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::business::ports::BusinessServicePort;
use crate::inbound::http::middleware::AdminUser;
use crate::inbound::http::router::AppState;

pub async fn list_businesses(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Result<ApiSuccess<Vec<BusinessData>>, ApiError> {
    state
        .business_service
        .list_owned_businesses(&admin)
        .await
        .map_err(ApiError::from)
        .map(|businesses| {
            ApiSuccess::new(
                StatusCode::OK,
                businesses.iter().map(BusinessData::from).collect(),
            )
        })
}
