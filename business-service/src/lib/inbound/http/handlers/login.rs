use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::LoginTokens;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Exchange email and password for an access/refresh token pair.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .auth_service
        .login(&body.email, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|tokens| ApiSuccess::new(StatusCode::OK, tokens.into()))
}

/// Form-encoded login for interactive API explorers; `username` carries the email.
pub async fn swagger_login(
    State(state): State<AppState>,
    Form(form): Form<SwaggerLoginForm>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .auth_service
        .login(&form.username, &form.password)
        .await
        .map_err(ApiError::from)
        .map(|tokens| ApiSuccess::new(StatusCode::OK, tokens.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SwaggerLoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl From<LoginTokens> for LoginResponseData {
    fn from(tokens: LoginTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}
