use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CategoryData;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    state
        .category_service
        .create_category(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    name: String,
    description: Option<String>,
    is_active: Option<bool>,
}

#[derive(Debug, Clone, Error)]
pub enum ParseCategoryRequestError {
    #[error("Name is required")]
    NameMissing,

    #[error("Name must be at most 255 characters")]
    NameTooLong,
}

pub fn validate_name(name: &str) -> Result<(), ParseCategoryRequestError> {
    if name.is_empty() {
        return Err(ParseCategoryRequestError::NameMissing);
    }
    if name.len() > 255 {
        return Err(ParseCategoryRequestError::NameTooLong);
    }
    Ok(())
}

impl CreateCategoryRequest {
    fn try_into_command(self) -> Result<CreateCategoryCommand, ParseCategoryRequestError> {
        validate_name(&self.name)?;

        Ok(CreateCategoryCommand {
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        })
    }
}

impl From<ParseCategoryRequestError> for ApiError {
    fn from(err: ParseCategoryRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
