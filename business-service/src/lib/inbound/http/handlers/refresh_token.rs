use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequestBody>,
) -> Result<ApiSuccess<RefreshTokenResponseData>, ApiError> {
    state
        .auth_service
        .refresh(&body.refresh_token)
        .await
        .map_err(ApiError::from)
        .map(|access_token| {
            ApiSuccess::new(
                StatusCode::OK,
                RefreshTokenResponseData {
                    access_token,
                    token_type: "bearer".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshTokenRequestBody {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshTokenResponseData {
    pub access_token: String,
    pub token_type: String,
}
