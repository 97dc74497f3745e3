use axum::extract::State;
use ladle_core::domain::{
    nutrition::NutritionFacts,
    recipe::{entities::Recipe, ports::RecipeService, value_objects::CreateRecipeInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::CreateRecipeValidator,
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
pub struct CreateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Publishes a recipe authored by the caller.",
    security(("bearer" = [])),
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = CreateRecipeResponse),
        (status = 400, description = "Invalid recipe"),
        (status = 401, description = "Missing or invalid token"),
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(
            identity,
            CreateRecipeInput {
                name: payload.name,
                instructions: payload.instructions,
                cooking_time: payload.cooking_time,
                image_url: payload.image_url,
                nutrition: NutritionFacts::new(
                    payload.calories,
                    payload.protein,
                    payload.carbs,
                    payload.fat,
                ),
                ingredients: payload.ingredients,
                tags: payload.tags,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
