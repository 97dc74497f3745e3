use axum::extract::State;
use ladle_core::domain::recipe::{ports::RecipeService, value_objects::HomeRecipes};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "recipe",
    summary = "Home",
    description = "Best rated and newest recipes.",
    responses(
        (status = 200, body = HomeRecipes),
    ),
)]
pub async fn get_home(State(state): State<AppState>) -> Result<Response<HomeRecipes>, ApiError> {
    let home = state.service.get_home().await.map_err(ApiError::from)?;

    Ok(Response::OK(home))
}
