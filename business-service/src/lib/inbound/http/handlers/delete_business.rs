use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::business::errors::BusinessError;
use crate::domain::business::models::BusinessId;
use crate::domain::business::ports::BusinessServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AdminUser;
use crate::inbound::http::router::AppState;

pub async fn delete_business(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let business_id = BusinessId::from_string(&id).map_err(BusinessError::from)?;

    state
        .business_service
        .delete_business(&admin, &business_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
