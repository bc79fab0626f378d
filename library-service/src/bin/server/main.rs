use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use library_service::config::Config;
use library_service::domain::auth::service::AuthService;
use library_service::domain::author::service::AuthorService;
use library_service::domain::category::service::CategoryService;
use library_service::domain::user::service::UserService;
use library_service::inbound::http::router::create_router;
use library_service::inbound::http::router::AppState;
use library_service::outbound::repositories::PostgresAuthorRepository;
use library_service::outbound::repositories::PostgresCategoryRepository;
use library_service::outbound::repositories::PostgresRefreshTokenRepository;
use library_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "library-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_token_expiration_minutes = config.jwt.access_token_expiration_minutes,
        refresh_token_expiration_days = config.jwt.refresh_token_expiration_days,
        password_hash_cost = config.password.hash_cost,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = Arc::new(PasswordHasher::new(config.password.hash_cost));
    let token_codec = Arc::new(TokenCodec::new(
        config.jwt.access_token_secret.as_bytes(),
        config.jwt.refresh_token_secret.as_bytes(),
        Duration::minutes(config.jwt.access_token_expiration_minutes),
        Duration::days(config.jwt.refresh_token_expiration_days),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let refresh_token_repository = Arc::new(PostgresRefreshTokenRepository::new(pg_pool.clone()));
    let author_repository = Arc::new(PostgresAuthorRepository::new(pg_pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pg_pool));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            refresh_token_repository,
            Arc::clone(&password_hasher),
            Arc::clone(&token_codec),
            Duration::days(config.jwt.refresh_token_expiration_days),
        )),
        user_service: Arc::new(UserService::new(user_repository, password_hasher)),
        author_service: Arc::new(AuthorService::new(author_repository)),
        category_service: Arc::new(CategoryService::new(category_repository)),
        token_codec,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
