use axum::extract::{Path, State};
use ladle_core::domain::recipe::{ports::RecipeService, value_objects::RecipeDetail};
use uuid::Uuid;

use crate::application::{
    auth::OptionalIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Recipe with its reviews and similar recipes. Signed-in callers also get their own rating.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = RecipeDetail),
        (status = 404, description = "Recipe not found"),
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<RecipeDetail>, ApiError> {
    let detail = state
        .service
        .get_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(detail))
}
