use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::auth::logout;
use super::handlers::auth::profile;
use super::handlers::auth::refresh;
use super::handlers::auth::register;
use super::handlers::authors::activate_author;
use super::handlers::authors::create_author;
use super::handlers::authors::deactivate_author;
use super::handlers::authors::delete_author;
use super::handlers::authors::get_author;
use super::handlers::authors::list_authors;
use super::handlers::authors::update_author;
use super::handlers::categories::activate_category;
use super::handlers::categories::create_category;
use super::handlers::categories::deactivate_category;
use super::handlers::categories::delete_category;
use super::handlers::categories::get_category;
use super::handlers::categories::list_categories;
use super::handlers::categories::update_category;
use super::handlers::users::activate_user;
use super::handlers::users::create_user;
use super::handlers::users::delete_user;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::users::update_user;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_role;
use crate::domain::auth::service::AuthService;
use crate::domain::author::service::AuthorService;
use crate::domain::category::service::CategoryService;
use crate::domain::user::models::Role;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresAuthorRepository;
use crate::outbound::repositories::PostgresCategoryRepository;
use crate::outbound::repositories::PostgresRefreshTokenRepository;
use crate::outbound::repositories::PostgresUserRepository;

const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Clone)]
pub struct AppState {
    pub auth_service:
        Arc<AuthService<PostgresUserRepository, PostgresRefreshTokenRepository>>,
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub author_service: Arc<AuthorService<PostgresAuthorRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    pub token_codec: Arc<TokenCodec>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh));

    let user_routes = Router::new()
        .route("/users", get(list_users))
        .route("/users/:user_id", get(get_user))
        .route("/users/:user_id", put(update_user));

    let admin_user_routes = Router::new()
        .route("/users", post(create_user))
        .route("/users/:user_id/activate", patch(activate_user))
        .route("/users/:user_id", delete(delete_user))
        .route_layer(middleware::from_fn(require_role(ADMIN_ONLY)));

    let author_routes = Router::new()
        .route("/authors", get(list_authors))
        .route("/authors/:author_id", get(get_author));

    let admin_author_routes = Router::new()
        .route("/authors", post(create_author))
        .route("/authors/:author_id", put(update_author))
        .route("/authors/:author_id", delete(delete_author))
        .route("/authors/:author_id/activate", patch(activate_author))
        .route("/authors/:author_id/deactivate", patch(deactivate_author))
        .route_layer(middleware::from_fn(require_role(ADMIN_ONLY)));

    let category_routes = Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:category_id", get(get_category));

    let admin_category_routes = Router::new()
        .route("/categories", post(create_category))
        .route("/categories/:category_id", put(update_category))
        .route("/categories/:category_id", delete(delete_category))
        .route("/categories/:category_id/activate", patch(activate_category))
        .route(
            "/categories/:category_id/deactivate",
            patch(deactivate_category),
        )
        .route_layer(middleware::from_fn(require_role(ADMIN_ONLY)));

    let protected_routes = Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/profile", get(profile))
        .merge(user_routes)
        .merge(admin_user_routes)
        .merge(author_routes)
        .merge(admin_author_routes)
        .merge(category_routes)
        .merge(admin_category_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .nest("/api", public_routes.merge(protected_routes))
        .route("/health", get(health))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "Server is running" }))
}
