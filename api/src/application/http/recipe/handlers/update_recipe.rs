use axum::extract::{Path, State};
use ladle_core::domain::recipe::{
    entities::Recipe,
    ports::RecipeService,
    value_objects::{RecipeChanges, UpdateRecipeInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::UpdateRecipeValidator,
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
pub struct UpdateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Changes the given fields of a recipe. Only its author or an admin may edit it.",
    security(("bearer" = [])),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = UpdateRecipeResponse),
        (status = 403, description = "Caller is neither the author nor an admin"),
        (status = 404, description = "Recipe not found"),
    ),
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(
            identity,
            UpdateRecipeInput {
                recipe_id,
                changes: RecipeChanges {
                    name: payload.name,
                    instructions: payload.instructions,
                    cooking_time: payload.cooking_time,
                    image_url: payload.image_url,
                    protein: payload.protein,
                    carbs: payload.carbs,
                    fat: payload.fat,
                    calories: payload.calories,
                    ingredients: payload.ingredients,
                    tags: payload.tags,
                },
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: recipe }))
}
