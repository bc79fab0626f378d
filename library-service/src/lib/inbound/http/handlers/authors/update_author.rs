use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::create_author::validate_name;
use super::create_author::validate_nationality;
use super::create_author::ParseAuthorRequestError;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::UpdateAuthorCommand;
use crate::domain::author::ports::AuthorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::router::AppState;

pub async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    Json(body): Json<UpdateAuthorRequest>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let author_id = AuthorId::from_string(&author_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .author_service
        .update_author(&author_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    name: Option<String>,
    bio: Option<String>,
    birth_date: Option<NaiveDate>,
    nationality: Option<String>,
    is_active: Option<bool>,
}

impl UpdateAuthorRequest {
    fn try_into_command(self) -> Result<UpdateAuthorCommand, ParseAuthorRequestError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        validate_nationality(self.nationality.as_ref())?;

        Ok(UpdateAuthorCommand {
            name: self.name,
            bio: self.bio,
            birth_date: self.birth_date,
            nationality: self.nationality,
            is_active: self.is_active,
        })
    }
}
