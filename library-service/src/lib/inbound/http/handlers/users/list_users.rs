use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::ListUsersQuery;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserStatus;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PaginationMeta;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<ApiSuccess<UsersListData>, ApiError> {
    let query = ListUsersQuery {
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(10).max(1),
        role: params.role,
        status: params.status,
        search: params.search,
    };
    let (page, limit) = (query.page, query.limit);

    let result = state
        .user_service
        .list_users(query)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        UsersListData {
            users: result.items.iter().map(UserData::from).collect(),
            pagination: PaginationMeta::new(page, limit, result.total),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersParams {
    page: Option<u32>,
    limit: Option<u32>,
    role: Option<Role>,
    status: Option<UserStatus>,
    search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersListData {
    pub users: Vec<UserData>,
    pub pagination: PaginationMeta,
}
