use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::auth::errors::AuthError;
use crate::business::errors::BusinessError;
use crate::user::errors::UserError;

pub mod create_business;
pub mod delete_business;
pub mod get_business;
pub mod get_profile;
pub mod get_user;
pub mod invite_user;
pub mod list_businesses;
pub mod login;
pub mod refresh_token;
pub mod set_user_active;
pub mod update_business;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Detail is logged, never sent to the client.
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    TokenExpired(String),
    Forbidden(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity")
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::TokenExpired(_) => (StatusCode::UNAUTHORIZED, "token_expired"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                "Internal server error".to_string()
            }
            ApiError::UnprocessableEntity(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::TokenExpired(msg)
            | ApiError::Forbidden(msg) => msg,
        };

        (
            status,
            Json(ApiResponseBody::new_error(status, message, code)),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            AuthError::NoSuchActiveUser(_) | AuthError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::ExpiredToken => ApiError::TokenExpired(err.to_string()),
            AuthError::Forbidden => ApiError::Forbidden(err.to_string()),
            AuthError::Internal(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidFullName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidRole(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<BusinessError> for ApiError {
    fn from(err: BusinessError) -> Self {
        match err {
            BusinessError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BusinessError::NameAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            BusinessError::NotOwner => ApiError::Forbidden(err.to_string()),
            BusinessError::InvalidBusinessId(_)
            | BusinessError::InvalidName(_)
            | BusinessError::InvalidLocation(_)
            | BusinessError::UnknownMember(_) => ApiError::UnprocessableEntity(err.to_string()),
            BusinessError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                code: code.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    pub code: String,
}
