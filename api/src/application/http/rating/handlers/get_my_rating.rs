use axum::extract::{Path, State};
use ladle_core::domain::rating::{entities::Rating, ports::RatingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMyRatingResponse {
    pub data: Rating,
}

#[utoipa::path(
    get,
    path = "",
    tag = "rating",
    summary = "Get my rating",
    description = "The caller's rating of a recipe, used to prefill the rating form.",
    security(("bearer" = [])),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetMyRatingResponse),
        (status = 404, description = "Recipe not rated by the caller"),
    ),
)]
pub async fn get_my_rating(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMyRatingResponse>, ApiError> {
    let rating = state
        .service
        .get_my_rating(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMyRatingResponse { data: rating }))
}
