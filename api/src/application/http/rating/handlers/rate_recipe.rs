use axum::extract::{Path, State};
use ladle_core::domain::rating::{
    entities::Rating, ports::RatingService, value_objects::RateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        rating::validators::RateRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RateRecipeResponse {
    pub data: Rating,
}

#[utoipa::path(
    put,
    path = "",
    tag = "rating",
    summary = "Rate recipe",
    description = "Creates the caller's rating of a recipe or replaces its score and comment.",
    security(("bearer" = [])),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = RateRecipeValidator,
    responses(
        (status = 201, description = "Rating created", body = RateRecipeResponse),
        (status = 200, description = "Rating updated", body = RateRecipeResponse),
        (status = 400, description = "Invalid score or comment"),
        (status = 404, description = "Recipe not found"),
    ),
)]
pub async fn rate_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RateRecipeValidator>,
) -> Result<Response<RateRecipeResponse>, ApiError> {
    let output = state
        .service
        .rate_recipe(
            identity,
            RateRecipeInput {
                recipe_id,
                score: payload.score,
                comment: payload.comment,
            },
        )
        .await
        .map_err(ApiError::from)?;

    let body = RateRecipeResponse {
        data: output.rating,
    };

    if output.created {
        Ok(Response::Created(body))
    } else {
        Ok(Response::OK(body))
    }
}
