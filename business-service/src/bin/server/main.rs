use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use auth::TokenIssuer;
use business_service::config::Config;
use business_service::domain::auth::service::AuthService;
use business_service::domain::business::service::BusinessService;
use business_service::domain::user::models::BootstrapAdminCommand;
use business_service::domain::user::models::EmailAddress;
use business_service::domain::user::models::FullName;
use business_service::domain::user::ports::UserServicePort;
use business_service::domain::user::service::UserService;
use business_service::inbound::http::router::create_router;
use business_service::outbound::notifications::LoggingInvitationNotifier;
use business_service::outbound::repositories::PostgresBusinessRepository;
use business_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "business_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "business-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        algorithm = ?config.auth.algorithm,
        access_ttl_days = config.auth.access_ttl_days,
        refresh_ttl_days = config.auth.refresh_ttl_days,
        timezone = %config.auth.timezone,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = Arc::new(PasswordHasher::new(config.auth.password_hash_scheme));
    let token_codec = TokenCodec::new(
        config.auth.secret_key.as_bytes(),
        config.auth.algorithm,
        config.auth.timezone,
    )?;
    let token_issuer = Arc::new(TokenIssuer::new(
        token_codec,
        config.auth.access_ttl_days,
        config.auth.refresh_ttl_days,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let business_repository = Arc::new(PostgresBusinessRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::new(LoggingInvitationNotifier::new()),
        Arc::clone(&password_hasher),
        config.auth.default_password.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        password_hasher,
        token_issuer,
    ));
    let business_service = Arc::new(BusinessService::new(business_repository));

    let admin = user_service
        .bootstrap_admin(BootstrapAdminCommand {
            full_name: FullName::new(config.admin.full_name.clone())?,
            email: EmailAddress::new(config.admin.email.clone())?,
            password: config.admin.password.clone(),
        })
        .await?;
    tracing::info!(user_id = %admin.id, "Administrator account ready");

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, auth_service, business_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");
    Ok(())
}
