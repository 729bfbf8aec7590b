use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_business::BusinessData;
use super::create_business::BusinessRequestBody;
use super::ApiError;
use super::ApiSuccess;
use crate::business::errors::BusinessError;
use crate::domain::business::models::BusinessId;
use crate::domain::business::ports::BusinessServicePort;
use crate::inbound::http::middleware::AdminUser;
use crate::inbound::http::router::AppState;

pub async fn update_business(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    Json(body): Json<BusinessRequestBody>,
) -> Result<ApiSuccess<BusinessData>, ApiError> {
    let business_id = BusinessId::from_string(&id).map_err(BusinessError::from)?;
    let details = body.try_into_details()?;

    state
        .business_service
        .update_business(&admin, &business_id, details)
        .await
        .map_err(ApiError::from)
        .map(|ref business| ApiSuccess::new(StatusCode::OK, business.into()))
}
