use axum::extract::{Query, State};
use ladle_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{PageRequest, RecipeSearchFilter, RecipeSearchResult},
};

use crate::application::http::{
    recipe::validators::SearchRecipesQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Search recipes",
    description = "Filters recipes by text, tags and nutrition bounds, newest first, one page at a time.",
    params(SearchRecipesQuery),
    responses(
        (status = 200, body = RecipeSearchResult),
        (status = 400, description = "Malformed query"),
    ),
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchRecipesQuery>,
) -> Result<Response<RecipeSearchResult>, ApiError> {
    let filter = RecipeSearchFilter::new(
        query.query,
        query.tags,
        query.min_protein,
        query.max_calories,
    );
    let page = PageRequest::new(query.page, query.per_page);

    let result = state
        .service
        .search_recipes(filter, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
