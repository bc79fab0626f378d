use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_category::validate_name;
use super::create_category::ParseCategoryRequestError;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CategoryData;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let category_id = CategoryId::from_string(&category_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .category_service
        .update_category(&category_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    name: Option<String>,
    description: Option<String>,
    is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    fn try_into_command(self) -> Result<UpdateCategoryCommand, ParseCategoryRequestError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }

        Ok(UpdateCategoryCommand {
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        })
    }
}
