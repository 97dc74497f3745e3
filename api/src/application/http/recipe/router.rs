use axum::{
    Router, middleware,
    routing::get,
};
use utoipa::OpenApi;

use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    get_home::get_home,
    get_recipe::{__path_get_recipe, get_recipe},
    quick_search::{__path_quick_search, quick_search},
    search_recipes::{__path_search_recipes, search_recipes},
    share_recipe::{__path_share_recipe, share_recipe},
    update_recipe::{__path_update_recipe, update_recipe},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    search_recipes,
    create_recipe,
    quick_search,
    get_recipe,
    update_recipe,
    share_recipe
))]
pub struct RecipeApiDoc;

/// The home page sits at the root path itself.
fn home_path(root_path: &str) -> String {
    if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    }
}

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&home_path(root_path), get(get_home))
        .route(
            &format!("{}/recipes", root_path),
            get(search_recipes).post(create_recipe),
        )
        .route(
            &format!("{}/recipes/search", root_path),
            get(quick_search),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe).put(update_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/share", root_path),
            get(share_recipe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}

#[cfg(test)]
mod tests {
    use super::home_path;

    #[test]
    fn home_is_the_root_path() {
        assert_eq!(home_path(""), "/");
        assert_eq!(home_path("/api"), "/api");
    }
}
