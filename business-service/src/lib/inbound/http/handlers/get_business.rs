use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_business::BusinessData;
use super::ApiError;
use super::ApiSuccess;
use crate::business::errors::BusinessError;
use crate::domain::business::models::BusinessId;
use crate::domain::business::ports::BusinessServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Any authenticated user may read a business.
pub async fn get_business(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(business_id): Path<String>,
) -> Result<ApiSuccess<BusinessData>, ApiError> {
    let business_id = BusinessId::from_string(&business_id).map_err(BusinessError::from)?;

    state
        .business_service
        .get_business(&business_id)
        .await
        .map_err(ApiError::from)
        .map(|ref business| ApiSuccess::new(StatusCode::OK, business.into()))
}
