use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_my_rating::{__path_get_my_rating, get_my_rating},
    rate_recipe::{__path_rate_recipe, rate_recipe},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_my_rating, rate_recipe))]
pub struct RatingApiDoc;

pub fn rating_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/rating",
                state.args.server.root_path
            ),
            get(get_my_rating).put(rate_recipe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
