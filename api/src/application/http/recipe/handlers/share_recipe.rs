use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use ladle_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/{recipe_id}/share",
    tag = "recipe",
    summary = "Share recipe",
    description = "Printer-friendly plain text rendition of a recipe.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 404, description = "Recipe not found"),
    ),
)]
pub async fn share_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let text = state
        .service
        .share_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
