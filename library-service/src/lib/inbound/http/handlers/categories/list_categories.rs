use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::category::models::ListCategoriesQuery;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CategoryData;
use crate::inbound::http::handlers::PaginationMeta;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListCategoriesParams>,
) -> Result<ApiSuccess<CategoriesListData>, ApiError> {
    let query = ListCategoriesQuery {
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(10).max(1),
        search: params.search,
        is_active: params.is_active,
    };
    let (page, limit) = (query.page, query.limit);

    let result = state
        .category_service
        .list_categories(query)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CategoriesListData {
            categories: result.items.iter().map(CategoryData::from).collect(),
            pagination: PaginationMeta::new(page, limit, result.total),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesParams {
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<String>,
    is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoriesListData {
    pub categories: Vec<CategoryData>,
    pub pagination: PaginationMeta,
}
