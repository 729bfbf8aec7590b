use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_business::create_business;
use super::handlers::delete_business::delete_business;
use super::handlers::get_business::get_business;
use super::handlers::get_profile::get_profile;
use super::handlers::get_user::get_user;
use super::handlers::invite_user::invite_user;
use super::handlers::list_businesses::list_businesses;
use super::handlers::login::login;
use super::handlers::login::swagger_login;
use super::handlers::refresh_token::refresh_token;
use super::handlers::set_user_active::set_user_active;
use super::handlers::update_business::update_business;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::business::ports::BusinessServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub business_service: Arc<dyn BusinessServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
    business_service: Arc<dyn BusinessServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        auth_service,
        business_service,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/v1/token", post(login))
        .route("/api/v1/swagger-login", post(swagger_login))
        .route("/api/v1/token/refresh", post(refresh_token));

    let protected_routes = Router::new()
        .route("/api/v1/profile", get(get_profile))
        .route("/api/v1/users", post(invite_user))
        .route("/api/v1/users/:user_id", get(get_user))
        .route("/api/v1/users/:user_id/active", patch(set_user_active))
        .route(
            "/api/v1/businesses",
            post(create_business).get(list_businesses),
        )
        .route(
            "/api/v1/businesses/:business_id",
            get(get_business)
                .put(update_business)
                .delete(delete_business),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}
