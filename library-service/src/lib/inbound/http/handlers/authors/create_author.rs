use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::ports::AuthorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::router::AppState;

pub async fn create_author(
    State(state): State<AppState>,
    Json(body): Json<CreateAuthorRequest>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    state
        .author_service
        .create_author(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::CREATED, author.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    name: String,
    bio: Option<String>,
    birth_date: Option<NaiveDate>,
    nationality: Option<String>,
    is_active: Option<bool>,
}

#[derive(Debug, Clone, Error)]
pub enum ParseAuthorRequestError {
    #[error("Name is required")]
    NameMissing,

    #[error("Name must be at most 255 characters")]
    NameTooLong,

    #[error("Nationality must be at most 100 characters")]
    NationalityTooLong,
}

pub fn validate_name(name: &str) -> Result<(), ParseAuthorRequestError> {
    if name.is_empty() {
        return Err(ParseAuthorRequestError::NameMissing);
    }
    if name.len() > 255 {
        return Err(ParseAuthorRequestError::NameTooLong);
    }
    Ok(())
}

pub fn validate_nationality(nationality: Option<&String>) -> Result<(), ParseAuthorRequestError> {
    if nationality.is_some_and(|n| n.len() > 100) {
        return Err(ParseAuthorRequestError::NationalityTooLong);
    }
    Ok(())
}

impl CreateAuthorRequest {
    fn try_into_command(self) -> Result<CreateAuthorCommand, ParseAuthorRequestError> {
        validate_name(&self.name)?;
        validate_nationality(self.nationality.as_ref())?;

        Ok(CreateAuthorCommand {
            name: self.name,
            bio: self.bio,
            birth_date: self.birth_date,
            nationality: self.nationality,
            is_active: self.is_active,
        })
    }
}

impl From<ParseAuthorRequestError> for ApiError {
    fn from(err: ParseAuthorRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
