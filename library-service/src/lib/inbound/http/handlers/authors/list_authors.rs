use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::author::models::ListAuthorsQuery;
use crate::domain::author::ports::AuthorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::handlers::PaginationMeta;
use crate::inbound::http::router::AppState;

pub async fn list_authors(
    State(state): State<AppState>,
    Query(params): Query<ListAuthorsParams>,
) -> Result<ApiSuccess<AuthorsListData>, ApiError> {
    let query = ListAuthorsQuery {
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(10).max(1),
        search: params.search,
        is_active: params.is_active,
    };
    let (page, limit) = (query.page, query.limit);

    let result = state
        .author_service
        .list_authors(query)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthorsListData {
            authors: result.items.iter().map(AuthorData::from).collect(),
            pagination: PaginationMeta::new(page, limit, result.total),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAuthorsParams {
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<String>,
    is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorsListData {
    pub authors: Vec<AuthorData>,
    pub pagination: PaginationMeta,
}
