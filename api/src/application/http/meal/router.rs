use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_meal_log::{__path_get_meal_log, get_meal_log},
    log_meal::{__path_log_meal, log_meal},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_meal_log, log_meal))]
pub struct MealApiDoc;

pub fn meal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meals", state.args.server.root_path),
            get(get_meal_log).post(log_meal),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
