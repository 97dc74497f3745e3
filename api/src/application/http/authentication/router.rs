use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    login::{__path_login, login},
    logout::{__path_logout, logout},
    register::{__path_register, register},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(register, login, logout))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/auth/register", state.args.server.root_path),
            post(register),
        )
        .route(
            &format!("{}/auth/login", state.args.server.root_path),
            post(login),
        )
        .route(
            &format!("{}/auth/logout", state.args.server.root_path),
            post(logout),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
