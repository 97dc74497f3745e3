use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::get_profile::{__path_get_profile, get_profile};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_profile))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
