use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::get_recommendations::{__path_get_recommendations, get_recommendations};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_recommendations))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommendations", state.args.server.root_path),
            get(get_recommendations),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
