use axum::extract::{Query, State};
use ladle_core::domain::recipe::{ports::RecipeService, value_objects::RecipeLookup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::QuickSearchQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct QuickSearchResponse {
    pub data: Vec<RecipeLookup>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "recipe",
    summary = "Quick search",
    description = "Recipe names containing `q`, for search-as-you-type.",
    params(QuickSearchQuery),
    responses(
        (status = 200, body = QuickSearchResponse),
    ),
)]
pub async fn quick_search(
    State(state): State<AppState>,
    Query(query): Query<QuickSearchQuery>,
) -> Result<Response<QuickSearchResponse>, ApiError> {
    let recipes = state
        .service
        .quick_search(query.q)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(QuickSearchResponse { data: recipes }))
}
